//! Menu Item Card Component
//!
//! One catalog entry with add and customize actions.

use leptos::prelude::*;

use crate::models::MenuItem;
use crate::store::{store_add_to_cart, use_app_store};

#[component]
pub fn MenuItemCard(
    item: MenuItem,
    set_customizing: WriteSignal<Option<MenuItem>>,
) -> impl IntoView {
    let store = use_app_store();

    let available = item.available;
    let can_customize = available && !item.ingredients.is_empty();
    let card_class = if available { "menu-card" } else { "menu-card unavailable" };
    let add_item = item.clone();
    let customize_item = item.clone();

    view! {
        <div class=card_class>
            {item.image_url.clone().map(|src| view! {
                <img class="menu-card-image" src=src alt=item.name.clone() />
            })}
            <div class="menu-card-body">
                <h3>{item.name.clone()}</h3>
                <p class="menu-card-desc">{item.description.clone()}</p>
                <span class="menu-card-price">{format!("${:.2}", item.price)}</span>
                {(!available).then(|| view! { <span class="sold-out">"Sold out"</span> })}
            </div>
            <div class="menu-card-actions">
                <button
                    disabled=!available
                    on:click=move |_| store_add_to_cart(&store, &add_item)
                >
                    "Add"
                </button>
                {can_customize.then(|| view! {
                    <button
                        class="customize-btn"
                        on:click=move |_| set_customizing.set(Some(customize_item.clone()))
                    >
                        "Customize"
                    </button>
                })}
            </div>
        </div>
    }
}

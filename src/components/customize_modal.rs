//! Customize Modal Component
//!
//! Ingredient removal checkboxes plus a free-text request for the kitchen.
//! Confirming replaces any existing cart line for the item.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::MenuItem;
use crate::store::{store_add_customized, use_app_store};

#[component]
pub fn CustomizeModal(
    item: MenuItem,
    set_customizing: WriteSignal<Option<MenuItem>>,
) -> impl IntoView {
    let store = use_app_store();

    let (removed, set_removed) = signal(Vec::<String>::new());
    let (request, set_request) = signal(String::new());

    let confirm_item = item.clone();
    let on_confirm = move |_| {
        let text = request.get();
        let special = if text.trim().is_empty() { None } else { Some(text) };
        store_add_customized(&store, &confirm_item, removed.get(), special);
        set_customizing.set(None);
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| set_customizing.set(None)>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Customize {}", item.name)}</h2>
                <p class="modal-hint">"Untick anything you want left out"</p>

                <ul class="ingredient-list">
                    {item.ingredients.iter().map(|ingredient| {
                        let label = ingredient.clone();
                        let checked_name = ingredient.clone();
                        let toggle_name = ingredient.clone();
                        view! {
                            <li>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || !removed.get().contains(&checked_name)
                                        on:change=move |_| set_removed.update(|r| {
                                            if let Some(pos) = r.iter().position(|n| n == &toggle_name) {
                                                r.remove(pos);
                                            } else {
                                                r.push(toggle_name.clone());
                                            }
                                        })
                                    />
                                    {label}
                                </label>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <textarea
                    placeholder="Special requests for the kitchen..."
                    prop:value=move || request.get()
                    on:input=move |ev| {
                        if let Some(area) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                        {
                            set_request.set(area.value());
                        }
                    }
                ></textarea>

                <div class="modal-actions">
                    <button on:click=on_confirm>"Add to cart"</button>
                    <button class="cancel-btn" on:click=move |_| set_customizing.set(None)>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}

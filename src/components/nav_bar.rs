//! Navigation Bar Component
//!
//! Route links, cart badge, and the login/logout corner.

use leptos::prelude::*;

use crate::auth;
use crate::context::{AppContext, NoticeKind, Route};
use crate::models::Role;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let cart_count = move || {
        store
            .cart()
            .get()
            .iter()
            .map(|line| line.quantity)
            .sum::<u32>()
    };
    let is_chef = move || {
        store
            .user()
            .get()
            .map(|u| u.role == Role::Chef)
            .unwrap_or(false)
    };

    let on_logout = move |_| {
        auth::clear_token();
        store_set_user(&store, None);
        ctx.notify(NoticeKind::Info, "Logged out");
        ctx.goto(Route::Menu);
    };

    let link_class = move |route: Route| {
        if ctx.route.get() == route {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand" on:click=move |_| ctx.goto(Route::Menu)>"Plateful"</span>

            <button class=move || link_class(Route::Menu) on:click=move |_| ctx.goto(Route::Menu)>
                "Menu"
                {move || {
                    let count = cart_count();
                    (count > 0).then(|| view! { <span class="cart-badge">{count}</span> })
                }}
            </button>

            {move || store.user().get().map(|_| view! {
                <button
                    class=move || link_class(Route::OrderHistory)
                    on:click=move |_| ctx.goto(Route::OrderHistory)
                >
                    "My Orders"
                </button>
            })}

            {move || is_chef().then(|| view! {
                <button
                    class=move || link_class(Route::ChefDashboard)
                    on:click=move |_| ctx.goto(Route::ChefDashboard)
                >
                    "Kitchen"
                </button>
            })}

            <div class="nav-session">
                {move || store.user().get().map(|user| view! {
                    <span class="nav-user">{user.name.clone()}</span>
                })}
                {move || if store.user().get().is_some() {
                    view! {
                        <button class="nav-link" on:click=on_logout>"Log out"</button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            class=move || link_class(Route::Login)
                            on:click=move |_| ctx.goto(Route::Login)
                        >
                            "Log in"
                        </button>
                    }.into_any()
                }}
            </div>
        </nav>
    }
}

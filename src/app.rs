//! Plateful Frontend App
//!
//! Main application component: context/store provision, session restore on
//! mount, and route switching.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::auth;
use crate::components::{
    ChefDashboard, LoginForm, MenuView, NavBar, NotificationToast, OrderDetail, OrderHistory,
    RegisterForm,
};
use crate::context::{AppContext, Notice, Route};
use crate::store::{store_set_user, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::Menu);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (menu_reload, set_menu_reload) = signal(0u32);
    let (notice_seq, set_notice_seq) = signal(0u32);

    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(
        (route, set_route),
        (notice, set_notice),
        (menu_reload, set_menu_reload),
        (notice_seq, set_notice_seq),
    );
    provide_context(ctx);

    // Restore the session from a stored token on mount
    Effect::new(move |_| {
        let Some(token) = auth::stored_token() else {
            return;
        };
        spawn_local(async move {
            match api::current_user(&token).await {
                Ok(user) => {
                    web_sys::console::log_1(
                        &format!("[APP] restored session for {}", user.email).into(),
                    );
                    store_set_user(&store, Some(user));
                }
                Err(err) if err.is_unauthorized() => auth::clear_token(),
                Err(_) => {}
            }
        });
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <NotificationToast />

            <main class="main-content">
                {move || match route.get() {
                    Route::Menu => view! { <MenuView /> }.into_any(),
                    Route::Login => view! { <LoginForm /> }.into_any(),
                    Route::Register => view! { <RegisterForm /> }.into_any(),
                    Route::OrderHistory => view! { <OrderHistory /> }.into_any(),
                    Route::OrderDetail(id) => view! { <OrderDetail order_id=id /> }.into_any(),
                    Route::ChefDashboard => view! { <ChefDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}

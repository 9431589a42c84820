//! Order History Component
//!
//! The customer's past orders, newest first. Rows open the detail view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::context::{AppContext, NoticeKind, Route};
use crate::models::Order;
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn OrderHistory() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(token) = auth::stored_token() else {
            ctx.notify(NoticeKind::Error, "Please log in to see your orders");
            ctx.goto(Route::Login);
            return;
        };
        spawn_local(async move {
            match api::order_history(&token).await {
                Ok(loaded) => set_orders.set(loaded),
                Err(err) if err.is_unauthorized() => {
                    auth::clear_token();
                    store_set_user(&store, None);
                    ctx.notify(NoticeKind::Error, "Your session has expired, please log in again");
                    ctx.goto(Route::Login);
                }
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Could not load your orders: {err}"));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="order-history">
            <h2>"My Orders"</h2>

            {move || loading.get().then(|| view! { <p class="loading">"Loading orders..."</p> })}

            {move || (!loading.get() && orders.get().is_empty()).then(|| view! {
                <p class="history-empty">"You have not ordered anything yet"</p>
            })}

            <For
                each=move || orders.get()
                key=|order| order.id
                children=move |order| {
                    let id = order.id;
                    let badge_class = format!("status-badge {}", order.status.as_str());
                    view! {
                        <div class="order-row" on:click=move |_| ctx.goto(Route::OrderDetail(id))>
                            <span class="order-row-id">{format!("#{}", order.id)}</span>
                            <span class="order-row-date">{order.placed_at.clone()}</span>
                            <span class=badge_class>
                                {order.status.label()}
                            </span>
                            <span class="order-row-total">{format!("${:.2}", order.total)}</span>
                        </div>
                    }
                }
            />
        </section>
    }
}

//! Chef Dashboard Component
//!
//! Chef-only view of open orders with status advancement
//! (pending → preparing → ready → delivered).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::context::{AppContext, NoticeKind, Route};
use crate::models::{Order, OrderStatus, Role};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ChefDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (reload, set_reload) = signal(0u32);

    let is_chef = move || {
        store
            .user()
            .get()
            .map(|u| u.role == Role::Chef)
            .unwrap_or(false)
    };

    Effect::new(move |_| {
        let _ = reload.get();
        if !is_chef() {
            return;
        }
        let Some(token) = auth::stored_token() else {
            ctx.goto(Route::Login);
            return;
        };
        spawn_local(async move {
            match api::open_orders(&token).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[CHEF] {} open orders", loaded.len()).into(),
                    );
                    set_orders.set(loaded);
                }
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Could not load orders: {err}"));
                }
            }
        });
    });

    let advance = move |id: u32, next: OrderStatus| {
        let Some(token) = auth::stored_token() else {
            ctx.goto(Route::Login);
            return;
        };
        spawn_local(async move {
            match api::set_order_status(&token, id, &next).await {
                Ok(_) => set_reload.update(|v| *v += 1),
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Could not update order: {err}"));
                }
            }
        });
    };

    view! {
        <section class="chef-dashboard">
            <h2>"Kitchen"</h2>

            {move || (!is_chef()).then(|| view! {
                <p class="chef-guard">"This view is for kitchen staff only"</p>
            })}

            {move || (is_chef() && orders.get().is_empty()).then(|| view! {
                <p class="chef-empty">"No open orders"</p>
            })}

            <For
                each=move || orders.get()
                key=|order| (order.id, order.status.clone())
                children=move |order| {
                    let id = order.id;
                    let next = order.status.next();
                    let badge_class = format!("status-badge {}", order.status.as_str());
                    view! {
                        <div class="chef-order">
                            <div class="chef-order-head">
                                <span class="order-row-id">{format!("#{}", order.id)}</span>
                                <span class=badge_class>
                                    {order.status.label()}
                                </span>
                                <span class="order-row-date">{order.placed_at.clone()}</span>
                            </div>
                            <ul class="chef-order-lines">
                                {order.lines.iter().map(|line| view! {
                                    <li>
                                        {format!("{} × {}", line.quantity, line.name)}
                                        {(!line.removed_ingredients.is_empty()).then(|| view! {
                                            <span class="order-line-custom">
                                                {format!(" (no {})", line.removed_ingredients.join(", "))}
                                            </span>
                                        })}
                                        {line.special_request.clone().map(|request| view! {
                                            <span class="order-line-custom">{format!(": {}", request)}</span>
                                        })}
                                    </li>
                                }).collect_view()}
                            </ul>
                            {next.map(|next| {
                                let label = format!("Mark {}", next.label().to_lowercase());
                                view! {
                                    <button
                                        class="advance-btn"
                                        on:click=move |_| advance(id, next.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            })}
                        </div>
                    }
                }
            />
        </section>
    }
}

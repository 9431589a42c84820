//! Order Detail Component
//!
//! One placed order: line breakdown with customizations, total, status, and
//! the feedback form once the order is delivered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::components::FeedbackForm;
use crate::context::{AppContext, NoticeKind, Route};
use crate::models::{Order, OrderStatus};

#[component]
pub fn OrderDetail(order_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (order, set_order) = signal::<Option<Order>>(None);

    Effect::new(move |_| {
        let Some(token) = auth::stored_token() else {
            ctx.goto(Route::Login);
            return;
        };
        spawn_local(async move {
            match api::order_detail(&token, order_id).await {
                Ok(loaded) => set_order.set(Some(loaded)),
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Could not load order: {err}"));
                    ctx.goto(Route::OrderHistory);
                }
            }
        });
    });

    view! {
        <section class="order-detail">
            {move || match order.get() {
                None => view! { <p class="loading">"Loading order..."</p> }.into_any(),
                Some(order) => {
                    let delivered = order.status == OrderStatus::Delivered;
                    let badge_class = format!("status-badge {}", order.status.as_str());
                    view! {
                        <div>
                            <h2>{format!("Order #{}", order.id)}</h2>
                            <p class="order-detail-meta">
                                <span class=badge_class>
                                    {order.status.label()}
                                </span>
                                <span>{order.placed_at.clone()}</span>
                            </p>

                            <ul class="order-lines">
                                {order.lines.iter().map(|line| view! {
                                    <li class="order-line">
                                        <span>{format!("{} × {}", line.quantity, line.name)}</span>
                                        {(!line.removed_ingredients.is_empty()).then(|| view! {
                                            <span class="order-line-custom">
                                                {format!("no {}", line.removed_ingredients.join(", "))}
                                            </span>
                                        })}
                                        {line.special_request.clone().map(|request| view! {
                                            <span class="order-line-custom">{request}</span>
                                        })}
                                        <span class="order-line-price">
                                            {format!("${:.2}", line.price * line.quantity as f64)}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ul>

                            <p class="order-detail-total">{format!("Total: ${:.2}", order.total)}</p>

                            {delivered.then(|| view! { <FeedbackForm order_id=order.id /> })}
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}

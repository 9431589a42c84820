//! Cart Panel Component
//!
//! Cart lines, quantity controls, total, and the order submission flow with
//! status-coded failure handling (400 prune offer, 401 re-login, 404 refetch).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::cart::{self, SubmitBlock, SubmitFailure};
use crate::context::{AppContext, NoticeKind, Route};
use crate::store::{
    store_clear_cart, store_prune_unavailable, store_remove_line, store_set_user,
    store_update_quantity, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (submitting, set_submitting) = signal(false);
    let (prune_offer, set_prune_offer) = signal::<Option<String>>(None);

    let on_submit = move |_| {
        let lines_snapshot = store.cart().get();
        let token = auth::stored_token();

        match cart::check_submit(&lines_snapshot, token.is_some()) {
            Err(SubmitBlock::EmptyCart) => {
                ctx.notify(NoticeKind::Error, "Your cart is empty");
                return;
            }
            Err(SubmitBlock::NotLoggedIn) => {
                ctx.notify(NoticeKind::Error, "Please log in to place an order");
                ctx.goto(Route::Login);
                return;
            }
            Ok(()) => {}
        }
        let Some(token) = token else { return };

        let lines = cart::order_lines(&lines_snapshot);
        let total = cart::total(&lines_snapshot);
        set_submitting.set(true);
        spawn_local(async move {
            web_sys::console::log_1(
                &format!("[CART] submitting {} lines, total {:.2}", lines.len(), total).into(),
            );
            match api::place_order(&token, &lines, total).await {
                Ok(resp) => {
                    store_clear_cart(&store);
                    let message = if resp.message.is_empty() {
                        "Order placed".to_string()
                    } else {
                        resp.message
                    };
                    ctx.notify(NoticeKind::Success, message);
                    ctx.goto(Route::OrderDetail(resp.order_id));
                }
                Err(err) => match cart::classify_submit_failure(&err) {
                    SubmitFailure::ItemUnavailable { message } => {
                        ctx.notify(NoticeKind::Error, message.clone());
                        set_prune_offer.set(Some(message));
                    }
                    SubmitFailure::Rejected { message } => {
                        ctx.notify(NoticeKind::Error, message);
                    }
                    SubmitFailure::SessionExpired => {
                        auth::clear_token();
                        store_set_user(&store, None);
                        ctx.notify(NoticeKind::Error, "Your session has expired, please log in again");
                        ctx.goto(Route::Login);
                    }
                    SubmitFailure::StaleMenu => {
                        ctx.notify(NoticeKind::Info, "The menu has changed, refreshing it now");
                        ctx.reload_menu();
                    }
                    SubmitFailure::Other { message } => {
                        ctx.notify(NoticeKind::Error, format!("Order failed: {message}"));
                    }
                },
            }
            set_submitting.set(false);
        });
    };

    view! {
        <aside class="cart-panel">
            <h2>"Your Order"</h2>

            {move || store.cart().get().is_empty().then(|| view! {
                <p class="cart-empty">"Nothing here yet, pick something from the menu"</p>
            })}

            // key carries quantity and customization so edits re-render the row
            <For
                each=move || store.cart().get()
                key=|line| (
                    line.item.id,
                    line.quantity,
                    line.removed_ingredients.clone(),
                    line.special_request.clone(),
                )
                children=move |line| {
                    let id = line.item.id;
                    let quantity = line.quantity;
                    view! {
                        <div class="cart-line">
                            <div class="cart-line-info">
                                <span class="cart-line-name">{line.item.name.clone()}</span>
                                {(!line.removed_ingredients.is_empty()).then(|| view! {
                                    <span class="cart-line-custom">
                                        {format!("no {}", line.removed_ingredients.join(", "))}
                                    </span>
                                })}
                                {line.special_request.clone().map(|request| view! {
                                    <span class="cart-line-custom">{request}</span>
                                })}
                            </div>
                            <div class="cart-line-qty">
                                <button
                                    disabled={quantity <= 1}
                                    on:click=move |_| store_update_quantity(&store, id, quantity - 1)
                                >
                                    "-"
                                </button>
                                <span>{quantity}</span>
                                <button on:click=move |_| store_update_quantity(&store, id, quantity + 1)>
                                    "+"
                                </button>
                            </div>
                            <span class="cart-line-total">{format!("${:.2}", line.line_total())}</span>
                            <button class="remove-btn" on:click=move |_| store_remove_line(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />

            {move || prune_offer.get().map(|message| {
                let shown = message.clone();
                view! {
                    <div class="prune-offer">
                        <span>{shown}</span>
                        <button on:click=move |_| {
                            store_prune_unavailable(&store, &message);
                            set_prune_offer.set(None);
                        }>
                            "Remove unavailable items"
                        </button>
                    </div>
                }
            })}

            <div class="cart-footer">
                <span class="cart-total">
                    {move || format!("Total: ${:.2}", cart::total(&store.cart().get()))}
                </span>
                <button
                    class="submit-btn"
                    disabled=move || submitting.get()
                    on:click=on_submit
                >
                    {move || if submitting.get() { "Placing order..." } else { "Place order" }}
                </button>
            </div>
        </aside>
    }
}

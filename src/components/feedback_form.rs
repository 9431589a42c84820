//! Feedback Form Component
//!
//! Rating + comment for a delivered order. Collapses after submission.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::context::{AppContext, NoticeKind};
use crate::models::Feedback;

#[component]
pub fn FeedbackForm(order_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (rating, set_rating) = signal(5u8);
    let (comment, set_comment) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth::stored_token() else {
            ctx.notify(NoticeKind::Error, "Please log in to leave feedback");
            return;
        };
        let feedback = Feedback {
            order_id,
            rating: rating.get(),
            comment: comment.get(),
        };
        spawn_local(async move {
            match api::submit_feedback(&token, &feedback).await {
                Ok(()) => {
                    ctx.notify(NoticeKind::Success, "Thanks for your feedback!");
                    set_sent.set(true);
                }
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Could not send feedback: {err}"));
                }
            }
        });
    };

    view! {
        {move || if sent.get() {
            view! { <p class="feedback-sent">"Feedback sent"</p> }.into_any()
        } else {
            view! {
                <form class="feedback-form" on:submit=on_submit>
                    <h3>"How was it?"</h3>
                    <div class="rating-row">
                        {(1u8..=5).map(|value| view! {
                            <button
                                type="button"
                                class=move || { if rating.get() >= value { "star active" } else { "star" } }
                                on:click=move |_| set_rating.set(value)
                            >
                                "★"
                            </button>
                        }).collect_view()}
                    </div>
                    <textarea
                        placeholder="Tell us about your meal..."
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Send feedback"</button>
                </form>
            }.into_any()
        }}
    }
}

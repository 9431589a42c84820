//! Notification Toast Component
//!
//! Single app-wide toast slot. Auto-dismisses after a few seconds; the seq
//! check keeps an old timer from clearing a newer toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, NoticeKind};

const DISMISS_MS: u32 = 4_000;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if let Some(notice) = ctx.notice.get() {
            let seq = notice.seq;
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_MS).await;
                ctx.dismiss(seq);
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "toast",
                NoticeKind::Success => "toast success",
                NoticeKind::Error => "toast error",
            };
            let seq = notice.seq;
            view! {
                <div class=class on:click=move |_| ctx.dismiss(seq)>
                    {notice.text.clone()}
                </div>
            }
        })}
    }
}

//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::context::{AppContext, NoticeKind, Route};
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if let Err(message) = auth::validate_login(&email, &password) {
            ctx.notify(NoticeKind::Error, message);
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(resp) => {
                    auth::store_token(&resp.token);
                    store_set_user(&store, Some(resp.user));
                    ctx.notify(NoticeKind::Success, "Welcome back");
                    ctx.goto(Route::Menu);
                }
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Login failed: {err}"));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Log in"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Logging in..." } else { "Log in" }}
            </button>
            <p class="auth-switch">
                "No account yet? "
                <button type="button" class="link-btn" on:click=move |_| ctx.goto(Route::Register)>
                    "Register"
                </button>
            </p>
        </form>
    }
}

//! Registration Form Component
//!
//! Client-side validation (name, email shape, password length, confirmation
//! match) runs before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::context::{AppContext, NoticeKind, Route};
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let email = email.get();
        let password = password.get();
        if let Err(message) =
            auth::validate_registration(&name, &email, &password, &confirm.get())
        {
            ctx.notify(NoticeKind::Error, message);
            return;
        }

        set_busy.set(true);
        spawn_local(async move {
            match api::register(&name, &email, &password).await {
                Ok(resp) => {
                    auth::store_token(&resp.token);
                    store_set_user(&store, Some(resp.user));
                    ctx.notify(NoticeKind::Success, "Account created, welcome!");
                    ctx.goto(Route::Menu);
                }
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Registration failed: {err}"));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Create an account"</h2>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
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
            <input
                type="password"
                placeholder="Confirm password"
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating..." } else { "Register" }}
            </button>
            <p class="auth-switch">
                "Already registered? "
                <button type="button" class="link-btn" on:click=move |_| ctx.goto(Route::Login)>
                    "Log in"
                </button>
            </p>
        </form>
    }
}

//! Menu View Component
//!
//! Catalog fetch, category filter, item grid, and the cart panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CartPanel, CustomizeModal, MenuItemCard};
use crate::context::{AppContext, NoticeKind};
use crate::models::MenuItem;
use crate::store::{store_set_menu, use_app_store, AppStateStoreFields};

#[component]
pub fn MenuView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (category, set_category) = signal(String::from("All"));
    let (loading, set_loading) = signal(false);
    let (customizing, set_customizing) = signal::<Option<MenuItem>>(None);

    // Fetch on mount and whenever a stale-menu refetch is triggered
    Effect::new(move |_| {
        let _ = ctx.menu_reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_menu().await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[MENU] loaded {} items", items.len()).into(),
                    );
                    store_set_menu(&store, items);
                }
                Err(err) => {
                    ctx.notify(NoticeKind::Error, format!("Could not load the menu: {err}"));
                }
            }
            set_loading.set(false);
        });
    });

    let categories = Memo::new(move |_| {
        let mut cats: Vec<String> = store
            .menu()
            .get()
            .iter()
            .map(|item| item.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    });

    let visible = Memo::new(move |_| {
        let cat = category.get();
        store
            .menu()
            .get()
            .into_iter()
            .filter(|item| cat == "All" || item.category == cat)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="menu-layout">
            <section class="menu-main">
                <div class="category-bar">
                    <button
                        class=move || if category.get() == "All" { "category-btn active" } else { "category-btn" }
                        on:click=move |_| set_category.set("All".to_string())
                    >
                        "All"
                    </button>
                    <For
                        each=move || categories.get()
                        key=|cat| cat.clone()
                        children=move |cat| {
                            let label = cat.clone();
                            let select = cat.clone();
                            let is_active = move || category.get() == cat;
                            view! {
                                <button
                                    class=move || if is_active() { "category-btn active" } else { "category-btn" }
                                    on:click=move |_| set_category.set(select.clone())
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>

                {move || loading.get().then(|| view! { <p class="loading">"Loading menu..."</p> })}

                <div class="menu-grid">
                    <For
                        each=move || visible.get()
                        key=|item| (item.id, item.available)
                        children=move |item| view! {
                            <MenuItemCard item=item set_customizing=set_customizing />
                        }
                    />
                </div>
            </section>

            <CartPanel />

            {move || customizing.get().map(|item| view! {
                <CustomizeModal item=item set_customizing=set_customizing />
            })}
        </div>
    }
}

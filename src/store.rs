//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Cart mutation
//! goes through the helpers here, which delegate to the pure cart module.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart;
use crate::models::{CartLine, MenuItem, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current catalog
    pub menu: Vec<MenuItem>,
    /// In-progress cart
    pub cart: Vec<CartLine>,
    /// Authenticated account for this browser session
    pub user: Option<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_menu(store: &AppStore, menu: Vec<MenuItem>) {
    *store.menu().write() = menu;
}

pub fn store_add_to_cart(store: &AppStore, item: &MenuItem) {
    cart::add(&mut store.cart().write(), item);
}

pub fn store_add_customized(
    store: &AppStore,
    item: &MenuItem,
    removed_ingredients: Vec<String>,
    special_request: Option<String>,
) {
    cart::add_customized(
        &mut store.cart().write(),
        item,
        removed_ingredients,
        special_request,
    );
}

pub fn store_update_quantity(store: &AppStore, item_id: u32, quantity: u32) {
    cart::update_quantity(&mut store.cart().write(), item_id, quantity);
}

pub fn store_remove_line(store: &AppStore, item_id: u32) {
    cart::remove(&mut store.cart().write(), item_id);
}

pub fn store_clear_cart(store: &AppStore) {
    store.cart().write().clear();
}

pub fn store_prune_unavailable(store: &AppStore, message: &str) {
    cart::prune_named(&mut store.cart().write(), message);
}

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.user().write() = user;
}

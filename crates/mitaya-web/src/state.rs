//! Application state store
//!
//! Single source of truth for the active language, the cart, and the cart
//! drawer flag. One instance is constructed at startup and passed through
//! context; every mutation of the cart persists the new snapshot before
//! returning, so storage never lags the in-memory state.

use leptos::prelude::*;
use mitaya_core::{translate, Cart, CartItem, Language, MenuItem};

use crate::storage;

/// Reactive store handle. `Copy`, so components capture it freely.
#[derive(Clone, Copy)]
pub struct AppStore {
    language: RwSignal<Language>,
    cart: RwSignal<Cart>,
    cart_open: RwSignal<bool>,
}

impl AppStore {
    /// Build a store, rehydrating the cart from durable storage. A missing
    /// or unreadable snapshot silently yields an empty cart.
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(Language::default()),
            cart: RwSignal::new(storage::load_cart()),
            cart_open: RwSignal::new(false),
        }
    }

    // ----- language -----

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Replace the active language. Cart contents are untouched: item text
    /// is resolved per language at render time, not at store time.
    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
    }

    /// Translate `key` in the active language, falling back to the key.
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.language.get(), key)
    }

    // ----- cart -----

    /// Add one unit of `item` and open the drawer. Always succeeds.
    pub fn add_to_cart(&self, item: &MenuItem) {
        self.cart.update(|cart| cart.add(item));
        self.persist();
        self.cart_open.set(true);
    }

    /// Delete a cart line. No-op for unknown ids.
    pub fn remove_from_cart(&self, id: &str) {
        self.cart.update(|cart| cart.remove(id));
        self.persist();
    }

    /// Adjust a line's quantity; the quantity-1 floor is enforced by the
    /// cart itself. No-op for unknown ids.
    pub fn update_quantity(&self, id: &str, delta: i64) {
        self.cart.update(|cart| cart.update_quantity(id, delta));
        self.persist();
    }

    pub fn cart_items(&self) -> Vec<CartItem> {
        self.cart.with(|cart| cart.items().to_vec())
    }

    /// Derived, never stored.
    pub fn cart_total(&self) -> u32 {
        self.cart.with(|cart| cart.total())
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.with(|cart| cart.item_count())
    }

    pub fn cart_is_empty(&self) -> bool {
        self.cart.with(|cart| cart.is_empty())
    }

    // ----- drawer -----

    pub fn is_cart_open(&self) -> bool {
        self.cart_open.get()
    }

    pub fn set_cart_open(&self, open: bool) {
        self.cart_open.set(open);
    }

    /// Write the current snapshot to durable storage. Runs after every
    /// cart mutation as part of the same logical step.
    fn persist(&self) {
        self.cart.with_untracked(storage::save_cart);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct the store and provide it through context at the app root.
pub fn provide_app_store() {
    provide_context(AppStore::new());
}

/// Access the store. Panics when called outside the provider tree; that is
/// a wiring bug caught immediately, not a user-facing condition.
pub fn use_app() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mitaya_core::MENU_ITEMS;

    #[test]
    fn test_add_to_cart_merges_and_opens_drawer() {
        let store = AppStore::new();
        assert!(!store.is_cart_open());

        store.add_to_cart(&MENU_ITEMS[0]);
        store.add_to_cart(&MENU_ITEMS[0]);

        let items = store.cart_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert!(store.is_cart_open());
    }

    #[test]
    fn test_decrement_floor_holds_through_store() {
        let store = AppStore::new();
        store.add_to_cart(&MENU_ITEMS[0]);
        store.update_quantity("1", -3);
        assert_eq!(store.cart_items()[0].quantity, 1);
    }

    #[test]
    fn test_total_and_count_are_derived() {
        let store = AppStore::new();
        store.add_to_cart(&MENU_ITEMS[0]); // 450
        store.add_to_cart(&MENU_ITEMS[4]); // 180
        store.update_quantity("5", 2);
        assert_eq!(store.cart_total(), 450 + 3 * 180);
        assert_eq!(store.cart_item_count(), 4);

        store.remove_from_cart("5");
        assert_eq!(store.cart_total(), 450);
        assert_eq!(store.cart_item_count(), 1);
    }

    #[test]
    fn test_language_switch_leaves_cart_alone() {
        let store = AppStore::new();
        store.add_to_cart(&MENU_ITEMS[1]);
        let before = store.cart_items();

        store.set_language(Language::ZhTw);
        assert_eq!(store.language(), Language::ZhTw);
        assert_eq!(store.cart_items(), before);
        assert_eq!(store.t("nav.menu"), "菜單");
    }

    #[test]
    fn test_translation_falls_back_to_key() {
        let store = AppStore::new();
        assert_eq!(store.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_drawer_flag_toggles() {
        let store = AppStore::new();
        store.set_cart_open(true);
        assert!(store.is_cart_open());
        store.set_cart_open(false);
        assert!(!store.is_cart_open());
    }
}

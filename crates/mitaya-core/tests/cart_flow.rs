//! End-to-end cart exercises across the public API: catalog -> cart
//! mutations -> persisted snapshot -> rehydration.

use mitaya_core::{Cart, CategoryFilter, Language, MENU_ITEMS};

#[test]
fn test_full_ordering_session_round_trips_through_storage() {
    let mut cart = Cart::new();

    // Browse the menu the way the page does, then order from the results.
    let mains = mitaya_core::filter_menu(
        &MENU_ITEMS,
        CategoryFilter::Popular,
        "risotto",
        false,
        Language::En,
    );
    assert_eq!(mains.len(), 1);
    cart.add(mains[0]);
    cart.add(mains[0]);
    cart.add(&MENU_ITEMS[4]);

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), 2 * 450 + 180);

    // Reload: the snapshot written after the last mutation restores the
    // exact same cart, including order and quantities.
    let snapshot = cart.to_json().expect("cart serializes");
    let restored = Cart::from_json_lossy(&snapshot);
    assert_eq!(restored, cart);
    assert_eq!(restored.total(), cart.total());
}

#[test]
fn test_quantity_floor_survives_rehydration() {
    let mut cart = Cart::new();
    cart.add(&MENU_ITEMS[0]);

    let mut restored = Cart::from_json_lossy(&cart.to_json().unwrap());
    restored.update_quantity("1", -1);
    assert_eq!(restored.items()[0].quantity, 1);
}

#[test]
fn test_corrupt_storage_reinitializes_empty() {
    for garbage in ["", "null", "[1,2,3]", "{\"cart\":[]}", "\u{0}\u{1}"] {
        let cart = Cart::from_json_lossy(garbage);
        assert!(cart.is_empty(), "expected empty cart for {garbage:?}");
        assert_eq!(cart.total(), 0);
    }
}

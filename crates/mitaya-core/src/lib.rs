//! mitaya-core - Core library for the Mitaya restaurant site
//!
//! Provides the menu catalog, cart model, localization table, menu
//! filtering, reservation validation, and route resolution. Everything here
//! is plain Rust with no browser dependency so the invariants can be tested
//! natively; the `mitaya-web` crate wires these into the Leptos frontend.

pub mod cart;
pub mod catalog;
pub mod i18n;
pub mod menu_filter;
pub mod reservation;
pub mod route;

pub use cart::{Cart, CartItem};
pub use catalog::{Category, CategoryFilter, LocalizedText, MenuItem, CATEGORIES, MENU_ITEMS};
pub use i18n::{translate, Language};
pub use menu_filter::filter_menu;
pub use reservation::{validate, FieldError, Reservation, ReservationErrors, ReservationForm};
pub use route::Route;

/// Format a menu price for display (whole NT$ amounts, no minor units).
pub fn format_price(price: u32) -> String {
    format!("${price}")
}

//! Leptos UI components

mod cart_drawer;
mod layout;

pub use cart_drawer::CartDrawer;
pub use layout::Layout;

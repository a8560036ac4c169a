//! Cart persistence in browser localStorage
//!
//! One fixed key holding the serialized cart snapshot. Reads are total:
//! a missing key or an unreadable value rehydrates as an empty cart. Write
//! failures (storage disabled, quota) are logged, never surfaced.

/// Storage key for the persisted cart snapshot.
pub const CART_STORAGE_KEY: &str = "mitaya-restaurant-cart";

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::CART_STORAGE_KEY;
    use leptos::prelude::window;
    use mitaya_core::Cart;

    fn local_storage() -> Option<web_sys::Storage> {
        window().local_storage().ok().flatten()
    }

    pub fn load_cart() -> Cart {
        match local_storage().and_then(|s| s.get_item(CART_STORAGE_KEY).ok().flatten()) {
            Some(json) => Cart::from_json_lossy(&json),
            None => Cart::new(),
        }
    }

    pub fn save_cart(cart: &Cart) {
        let Some(storage) = local_storage() else {
            leptos::logging::warn!("localStorage unavailable, cart will not persist");
            return;
        };
        match cart.to_json() {
            Ok(json) => {
                if storage.set_item(CART_STORAGE_KEY, &json).is_err() {
                    leptos::logging::warn!("failed to write cart snapshot");
                }
            }
            Err(err) => leptos::logging::warn!("failed to serialize cart: {err}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    //! Browser storage does not exist off-wasm; native builds (used by the
    //! store tests) keep the cart purely in memory.

    use mitaya_core::Cart;

    pub fn load_cart() -> Cart {
        Cart::new()
    }

    pub fn save_cart(_cart: &Cart) {}
}

pub use backend::{load_cart, save_cart};

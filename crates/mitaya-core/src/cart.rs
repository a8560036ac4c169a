//! Cart model
//!
//! An ordered collection of lines, at most one per menu item id. The cart
//! owns two invariants: a line's quantity never drops below 1 through
//! decrement (the decrement is rejected at the floor, removal is a separate
//! explicit operation), and the total is always recomputed from the lines,
//! never cached.
//!
//! The persisted snapshot is a plain JSON array of lines. There is no
//! schema version: anything that fails to parse is discarded and the cart
//! reinitializes empty (same graceful-degradation policy as preference
//! loading elsewhere in the workspace).

use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;

/// One cart line: a full copy of the menu item plus a quantity.
///
/// Serializes flat (menu item fields + `quantity`) to match the stored
/// snapshot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

/// The in-progress order, keyed by menu item id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`: increments the existing line or appends a new
    /// line with quantity 1. Always succeeds.
    pub fn add(&mut self, item: &MenuItem) {
        match self.items.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartItem {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove the line with `id` entirely. No-op for unknown ids.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|line| line.item.id != id);
    }

    /// Apply `delta` to the line's quantity. A delta that would take the
    /// quantity to 0 or below leaves the line unchanged; deleting a line
    /// is only ever done through [`Cart::remove`]. No-op for unknown ids.
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        if let Some(line) = self.items.iter_mut().find(|line| line.item.id == id) {
            let next = i64::from(line.quantity) + delta;
            if next > 0 {
                line.quantity = next as u32;
            }
        }
    }

    /// Sum of `price * quantity` over all lines, recomputed on every call.
    pub fn total(&self) -> u32 {
        self.items
            .iter()
            .map(|line| line.item.price * line.quantity)
            .sum()
    }

    /// Total number of units across all lines (header badge count).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Serialize the snapshot for durable storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a stored snapshot. Malformed input yields an empty cart, a
    /// warning is logged, nothing is surfaced to the caller.
    pub fn from_json_lossy(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!("discarding unreadable cart snapshot: {err}");
                Self::new()
            }
        }
    }
}

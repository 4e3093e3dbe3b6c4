//! Custom actions for the Cart actor.
//!
//! Every cart operation is an action on the single cart entity, so each one
//! runs to completion before the next is looked at.

use crate::model::{CheckoutSnapshot, NewCartItem};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit, creating the line if needed.
    AddItem(NewCartItem),
    /// Drops a line entirely.
    RemoveItem(String),
    /// Sets a line's quantity (clamped to at least 1).
    UpdateQuantity { id: String, quantity: u32 },
    Clear,
    /// Takes the checkout guard and captures the lines.
    ///
    /// # Errors
    /// Fails if the cart is empty or a checkout is already running.
    BeginCheckout,
    /// Clears the cart and releases the guard.
    CompleteCheckout,
    /// Releases the guard, keeping the lines.
    AbortCheckout,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// Quantity of the line after the add.
    AddItem(u32),
    /// Whether a line was removed.
    RemoveItem(bool),
    /// Whether the line existed.
    UpdateQuantity(bool),
    /// Lines removed.
    Clear(usize),
    BeginCheckout(CheckoutSnapshot),
    /// Lines removed.
    CompleteCheckout(usize),
    AbortCheckout,
}

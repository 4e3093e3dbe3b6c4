//! The shopping cart.
//!
//! All cart rules live on [`Cart`] as plain methods; the cart actor only
//! routes [`CartAction`](crate::cart_actor::CartAction)s to them.

use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Type-safe identifier for carts. There is one cart per running system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u64);

impl From<u64> for CartId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Whole rupees per unit.
    pub unit_price: u64,
    /// Always at least 1.
    pub quantity: u32,
    pub image_ref: Option<String>,
}

impl CartItem {
    /// `None` when the line's price does not fit in a `u64`.
    pub fn checked_line_total(&self) -> Option<u64> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }

    /// Saturates at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Why a cart refused to start a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutRefusal {
    #[error("a checkout is already in progress")]
    InProgress,

    #[error("the cart is empty")]
    Empty,

    /// The order total cannot be represented, so it cannot be charged.
    #[error("the cart total is too large")]
    TotalTooLarge,
}

/// A dish being put in the cart. The cart decides the quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    pub image_ref: Option<String>,
}

impl NewCartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_ref: None,
        }
    }
}

impl From<&MenuItem> for NewCartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            unit_price: item.price,
            image_ref: item.image_ref.clone(),
        }
    }
}

/// The lines and total captured when a checkout begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSnapshot {
    pub items: Vec<CartItem>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    pub id: CartId,
    items: Vec<CartItem>,
    checkout_in_flight: bool,
}

/// Payload for creating a cart.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checkout_in_flight(&self) -> bool {
        self.checkout_in_flight
    }

    /// Adds one unit. Returns the line's quantity afterwards.
    pub fn add_item(&mut self, item: NewCartItem) -> u32 {
        if let Some(line) = self.items.iter_mut().find(|line| line.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.items.push(CartItem {
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: 1,
            image_ref: item.image_ref,
        });
        1
    }

    /// Drops the whole line. Returns false if there was no such line.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        self.items.len() != before
    }

    /// Sets a line's quantity, clamped to at least 1. Returns false if there was no such line.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        match self.items.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    /// Returns the number of lines removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Recomputed from the lines on every call. Saturates at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.line_total()))
    }

    /// Exact total, or `None` if it overflows.
    pub fn checked_total(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |total, line| total.checked_add(line.checked_line_total()?))
    }

    /// Units across all lines. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Marks a checkout as running and captures what is being bought.
    pub fn begin_checkout(&mut self) -> Result<CheckoutSnapshot, CheckoutRefusal> {
        if self.checkout_in_flight {
            return Err(CheckoutRefusal::InProgress);
        }
        if self.items.is_empty() {
            return Err(CheckoutRefusal::Empty);
        }
        let total = self.checked_total().ok_or(CheckoutRefusal::TotalTooLarge)?;
        self.checkout_in_flight = true;
        Ok(CheckoutSnapshot {
            items: self.items.clone(),
            total,
        })
    }

    /// The order went through: empty the cart and release the guard.
    pub fn complete_checkout(&mut self) -> usize {
        self.checkout_in_flight = false;
        self.clear()
    }

    /// The checkout was called off: release the guard, keep the lines.
    pub fn abort_checkout(&mut self) {
        self.checkout_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paneer() -> NewCartItem {
        NewCartItem::new("1", "Paneer Tikka", 180)
    }

    fn dosa() -> NewCartItem {
        NewCartItem::new("4", "Masala Dosa", 100)
    }

    #[test]
    fn adding_the_same_id_twice_bumps_quantity() {
        let mut cart = Cart::new(CartId(1));
        assert_eq!(cart.add_item(paneer()), 1);
        assert_eq!(cart.add_item(paneer()), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_price(), 360);
    }

    #[test]
    fn total_tracks_every_sequence_of_adds() {
        let mut cart = Cart::new(CartId(1));
        let sequence = [paneer(), dosa(), paneer(), dosa(), dosa(), NewCartItem::new("5", "Samosa", 30)];
        for item in sequence {
            cart.add_item(item);
            let expected: u64 = cart
                .items()
                .iter()
                .map(|line| line.unit_price * u64::from(line.quantity))
                .sum();
            assert_eq!(cart.total_price(), expected);
        }
        assert_eq!(cart.total_price(), 2 * 180 + 3 * 100 + 30);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new(CartId(1));
        cart.add_item(dosa());
        cart.add_item(paneer());
        cart.add_item(dosa());
        let ids: Vec<&str> = cart.items().iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, ["4", "1"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new(CartId(1));
        cart.add_item(paneer());
        cart.add_item(paneer());
        assert!(cart.remove_item("1"));
        assert!(!cart.remove_item("1"));
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn update_quantity_clamps_to_one_and_ignores_unknown_ids() {
        let mut cart = Cart::new(CartId(1));
        cart.add_item(paneer());

        assert!(cart.update_quantity("1", 0));
        assert_eq!(cart.items()[0].quantity, 1);
        assert!(cart.update_quantity("1", 4));
        assert_eq!(cart.total_price(), 720);

        assert!(!cart.update_quantity("missing", 3));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn checkout_guard_refuses_reentry_and_empty_carts() {
        let mut cart = Cart::new(CartId(1));
        assert_eq!(cart.begin_checkout(), Err(CheckoutRefusal::Empty));
        assert!(!cart.checkout_in_flight());

        cart.add_item(paneer());
        let snapshot = cart.begin_checkout().unwrap();
        assert_eq!(snapshot.total, 180);
        assert_eq!(cart.begin_checkout(), Err(CheckoutRefusal::InProgress));

        cart.abort_checkout();
        assert_eq!(cart.items().len(), 1);
        assert!(cart.begin_checkout().is_ok());
        assert_eq!(cart.complete_checkout(), 1);
        assert!(cart.is_empty());
        assert!(!cart.checkout_in_flight());
    }

    #[test]
    fn totals_past_u64_max_are_refused_at_checkout() {
        let mut cart = Cart::new(CartId(1));
        let pricey = NewCartItem::new("9", "Gold Leaf Thali", u64::MAX / 2 + 1);
        cart.add_item(pricey.clone());
        cart.add_item(pricey);

        assert_eq!(cart.total_price(), u64::MAX);
        assert_eq!(cart.checked_total(), None);
        assert_eq!(cart.begin_checkout(), Err(CheckoutRefusal::TotalTooLarge));
        assert!(!cart.checkout_in_flight());

        assert!(cart.update_quantity("9", 1));
        assert_eq!(cart.begin_checkout().unwrap().total, u64::MAX / 2 + 1);
    }

    #[test]
    fn separate_lines_that_overflow_together_are_refused() {
        let mut cart = Cart::new(CartId(1));
        cart.add_item(NewCartItem::new("1", "A", u64::MAX - 10));
        cart.add_item(NewCartItem::new("2", "B", 11));
        assert_eq!(cart.total_price(), u64::MAX);
        assert_eq!(cart.begin_checkout(), Err(CheckoutRefusal::TotalTooLarge));
    }

    #[test]
    fn menu_items_enter_the_cart_under_their_menu_id() {
        let dish = MenuItem {
            id: crate::model::MenuItemId(12),
            name: "Biryani + Raita Combo".into(),
            price: 230,
            category: crate::model::Category::Combo,
            image_ref: Some("/flavorful-biryani.png".into()),
        };
        let mut cart = Cart::new(CartId(1));
        cart.add_item(NewCartItem::from(&dish));
        assert_eq!(cart.items()[0].id, "12");
        assert_eq!(cart.items()[0].unit_price, 230);
    }
}

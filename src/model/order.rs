//! Orders placed through checkout.
//!
//! Preparation and payment progress independently: payment succeeds as the
//! order is placed, while the kitchen moves the order through
//! [`OrderStatus`] at its own pace.

use crate::model::CartItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders, shown to people as `#0042`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:04}", self.0)
    }
}

/// Kitchen progress. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    PickedUp,
}

impl OrderStatus {
    /// Whether `next` is a legal step from `self`.
    ///
    /// Any later kitchen state may be reached directly (a chef can mark a
    /// placed order ready without starting it), but pickup requires `Ready`.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        match next {
            OrderStatus::Placed => false,
            OrderStatus::Preparing | OrderStatus::Ready => next > self,
            OrderStatus::PickedUp => self == OrderStatus::Ready,
        }
    }

    /// Still needs the kitchen or the counter.
    pub fn is_active(self) -> bool {
        self != OrderStatus::PickedUp
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
}

/// How the customer pays. Each method needs its own credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Paid to a UPI id.
    Upi,
    /// Paid through Google Pay, identified by phone number.
    GPay,
}

impl PaymentMethod {
    /// Name of the credential the checkout form asks for.
    pub fn credential_name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI ID",
            PaymentMethod::GPay => "phone number",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Upi => f.write_str("UPI"),
            PaymentMethod::GPay => f.write_str("GPAY"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Email of whoever was signed in, or "guest".
    pub customer: String,
    pub lines: Vec<CartItem>,
    pub total: u64,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub payment: PaymentStatus,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// "Chicken Biryani x2, Garlic Naan x1", as the kitchen board lists it.
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} x{}", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: String,
    pub lines: Vec<CartItem>,
    pub total: u64,
    pub address: String,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn statuses_only_move_forward() {
        assert!(Placed.can_advance_to(Preparing));
        assert!(Placed.can_advance_to(Ready));
        assert!(Preparing.can_advance_to(Ready));
        assert!(Ready.can_advance_to(PickedUp));

        assert!(!Preparing.can_advance_to(Preparing));
        assert!(!Ready.can_advance_to(Preparing));
        assert!(!Ready.can_advance_to(Ready));
        assert!(!Placed.can_advance_to(PickedUp));
        assert!(!PickedUp.can_advance_to(Ready));
        for status in [Placed, Preparing, Ready, PickedUp] {
            assert!(!status.can_advance_to(Placed));
        }
    }

    #[test]
    fn order_ids_render_as_short_tokens() {
        assert_eq!(OrderId(7).to_string(), "#0007");
        assert_eq!(OrderId(12345).to_string(), "#12345");
    }

    #[test]
    fn summary_lists_lines_with_quantities() {
        let line = |name: &str, quantity| CartItem {
            id: name.to_string(),
            name: name.to_string(),
            unit_price: 10,
            quantity,
            image_ref: None,
        };
        let order = Order {
            id: OrderId(1),
            customer: "guest".into(),
            lines: vec![line("Biryani", 2), line("Naan", 1)],
            total: 30,
            address: "Hostel B".into(),
            payment_method: PaymentMethod::Upi,
            status: Placed,
            payment: PaymentStatus::Succeeded,
            placed_at: Utc::now(),
        };
        assert_eq!(order.summary(), "Biryani x2, Naan x1");
    }

    #[test]
    fn payment_methods_name_their_credential() {
        assert_eq!(PaymentMethod::Upi.credential_name(), "UPI ID");
        assert_eq!(PaymentMethod::GPay.credential_name(), "phone number");
        assert_eq!(PaymentMethod::GPay.to_string(), "GPAY");
    }
}

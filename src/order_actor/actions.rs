//! Kitchen and counter steps for a placed order.

use crate::model::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    StartPreparing,
    /// Also tells the customer the order can be collected.
    MarkReady,
    MarkPickedUp,
}

impl OrderAction {
    /// The status the order ends up in.
    pub fn target(&self) -> OrderStatus {
        match self {
            OrderAction::StartPreparing => OrderStatus::Preparing,
            OrderAction::MarkReady => OrderStatus::Ready,
            OrderAction::MarkPickedUp => OrderStatus::PickedUp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderActionResult {
    Advanced { from: OrderStatus, to: OrderStatus },
}

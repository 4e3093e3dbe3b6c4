//! Feed entries an order emits as it moves along.

use crate::model::{NotificationCreate, NotificationKind, Order};

pub(crate) fn order_placed(order: &Order) -> NotificationCreate {
    NotificationCreate::new(
        NotificationKind::OrderPlaced,
        "Order Placed!",
        format!("Your order {} has been confirmed", order.id),
    )
    .with_order_ref(order.id.to_string())
    .with_amount(order.total)
}

pub(crate) fn payment_success(order: &Order) -> NotificationCreate {
    NotificationCreate::new(
        NotificationKind::PaymentSuccess,
        "Payment Successful",
        format!(
            "Payment of ₹{} via {} completed",
            order.total, order.payment_method
        ),
    )
    .with_amount(order.total)
}

pub(crate) fn order_ready(order: &Order) -> NotificationCreate {
    NotificationCreate::new(
        NotificationKind::OrderReady,
        "Order Ready!",
        format!(
            "Your order {} is ready for pickup. Please collect from the counter.",
            order.id
        ),
    )
    .with_order_ref(order.id.to_string())
}

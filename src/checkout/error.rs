use crate::cart_actor::CartError;
use crate::error::ValidationError;
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// Nothing was changed; the message names the missing field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another checkout for the same cart is still waiting on payment.
    #[error("Checkout already in progress")]
    InProgress,

    /// The pending checkout was cancelled before the order was placed.
    #[error("Checkout cancelled")]
    Cancelled,

    #[error(transparent)]
    Cart(CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    /// The task running the checkout ended without an answer.
    #[error("Checkout task failed: {0}")]
    Interrupted(String),
}

impl From<CartError> for CheckoutError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::Empty => CheckoutError::Validation(ValidationError::EmptyCart),
            CartError::CheckoutInProgress(_) => CheckoutError::InProgress,
            other => CheckoutError::Cart(other),
        }
    }
}

//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Touching a line that is not in the cart is not an error; those operations
/// report `false` instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Checkout was requested with nothing in the cart.
    #[error("Your cart is empty")]
    Empty,

    /// A checkout for this cart is already waiting on payment.
    #[error("Checkout already in progress for {0}")]
    CheckoutInProgress(String),

    /// The order total does not fit in a `u64`.
    #[error("Cart total is too large to check out")]
    TotalTooLarge,

    /// The actor answered with a result that does not belong to the request.
    #[error("Unexpected cart result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

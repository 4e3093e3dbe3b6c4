//! Input problems shared by every store and the checkout workflow.
//!
//! Each actor still has its own error enum (see `*_actor::error`); the
//! variants here are wrapped by those enums so that a missing field reads the
//! same wherever it is caught.

use crate::model::PaymentMethod;
use thiserror::Error;

/// A required field is missing or unusable. The message is meant for the
/// person filling in the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter delivery address")]
    MissingAddress,

    #[error("Please enter {}", .0.credential_name())]
    MissingCredential(PaymentMethod),

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Please enter a dish name")]
    MissingDishName,

    #[error("Price must be greater than zero")]
    InvalidPrice,
}

impl ValidationError {
    /// The form field the message refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingAddress => "address",
            ValidationError::MissingCredential(_) => "credential",
            ValidationError::EmptyCart => "cart",
            ValidationError::MissingDishName => "name",
            ValidationError::InvalidPrice => "price",
        }
    }
}

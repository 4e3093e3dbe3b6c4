//! Error types for the Menu actor.

use crate::error::ValidationError;
use crate::model::Role;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The dish was rejected before it reached the menu.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// Menu edits need a signed-in chef or manager.
    #[error("Please log in")]
    NotLoggedIn,

    #[error("The {0} role cannot edit the menu")]
    NotPermitted(Role),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}

//! # Menu Actor
//!
//! The dishes customers browse and chefs or managers edit. Items keep the
//! order they were added in, which is the order the menu is shown in.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use actor_framework::{ResourceActor, ResourceClient, SequentialIds};

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(buffer_size, SequentialIds::new())
}

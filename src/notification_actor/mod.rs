//! # Notification Actor
//!
//! The in-app feed. Entries are kept in insertion order by the actor;
//! [`NotificationClient::feed`](crate::clients::NotificationClient::feed)
//! returns them newest first.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Notification;
use actor_framework::{ResourceActor, ResourceClient, SequentialIds};

/// Creates a new Notification actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Notification>, ResourceClient<Notification>) {
    ResourceActor::new(buffer_size, SequentialIds::new())
}

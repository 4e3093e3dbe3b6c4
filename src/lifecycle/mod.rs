//! # Lifecycle
//!
//! Starting, wiring and stopping the stores.
//!
//! Actors are created first, with no dependencies, and only then started
//! with their context. The order actor is the one store that needs another:
//! it runs with a [`NotificationClient`](crate::clients::NotificationClient)
//! so it can post feed entries. The dependency graph is acyclic, so dropping
//! every client is enough to stop the system; see [`CanteenSystem::shutdown`].

pub mod canteen_system;
pub mod tracing;

pub use canteen_system::*;
pub use tracing::*;

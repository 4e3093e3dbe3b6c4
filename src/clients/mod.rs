//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient),
//! one per store.
//!
//! Each wrapper maps [`FrameworkError`](actor_framework::FrameworkError) back
//! into its store's own error enum, so a rejected action arrives as, say,
//! `CartError::Empty` rather than an opaque entity error.

pub mod cart_client;
pub mod menu_client;
pub mod notification_client;
pub mod order_client;

pub use actor_framework::ActorClient;
pub use cart_client::*;
pub use menu_client::*;
pub use notification_client::*;
pub use order_client::*;

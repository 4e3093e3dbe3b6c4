//! Plain data types for the canteen stores, plus the pure rules that apply to
//! them (cart arithmetic, order transitions, catalog filters).
//!
//! The `ActorEntity` implementations live next to each actor
//! ([`crate::cart_actor`], [`crate::notification_actor`], ...).

pub mod cart;
pub mod menu;
pub mod notification;
pub mod order;
pub mod session;

pub use cart::*;
pub use menu::*;
pub use notification::*;
pub use order::*;
pub use session::*;

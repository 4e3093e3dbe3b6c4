//! # Cart Actor
//!
//! Holds the cart for the running session. All cart rules live on
//! [`Cart`](crate::model::Cart); this actor serialises access to it and
//! carries the checkout guard that stops a second checkout from starting
//! while one is waiting on payment.
//!
//! - [`entity`] - `ActorEntity` implementation for `Cart`
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]
//!
//! ```rust
//! use canteen::cart_actor;
//! use canteen::clients::CartClient;
//! use canteen::model::NewCartItem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let cart = CartClient::open(generic_client).await?;
//!     cart.add_item(NewCartItem::new("1", "Paneer Tikka", 180)).await?;
//!     cart.add_item(NewCartItem::new("1", "Paneer Tikka", 180)).await?;
//!     assert_eq!(cart.total_price().await?, 360);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Cart;
use actor_framework::{ResourceActor, ResourceClient, SequentialIds};

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size, SequentialIds::new())
}

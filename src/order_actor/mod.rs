//! # Order Actor
//!
//! Placed orders and their progress from the kitchen to the counter. The
//! actor's context is a [`NotificationClient`](crate::clients::NotificationClient):
//! every feed entry about an order is posted from here, so the order and its
//! notifications cannot drift apart.
//!
//! Status moves forward only (`placed → preparing → ready → picked_up`);
//! payment is settled once, at placement.

mod actions;
pub mod entity;
pub mod error;
mod notices;

pub use actions::*;
pub use error::*;

use crate::config::OrderIdStrategy;
use crate::model::Order;
use actor_framework::{RandomIds, ResourceActor, ResourceClient, SequentialIds};

/// Random tokens render as `#1000` to `#9999`.
const RANDOM_ORDER_IDS: std::ops::Range<u64> = 1000..10_000;

/// Creates a new Order actor and its client.
pub fn new(
    buffer_size: usize,
    ids: OrderIdStrategy,
) -> (ResourceActor<Order>, ResourceClient<Order>) {
    match ids {
        OrderIdStrategy::Sequential => ResourceActor::new(buffer_size, SequentialIds::new()),
        OrderIdStrategy::Random => {
            ResourceActor::new(buffer_size, RandomIds::new(RANDOM_ORDER_IDS))
        }
    }
}

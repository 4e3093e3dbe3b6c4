//! # Actor Framework
//!
//! Generic building blocks for in-memory stores that each live in their own
//! Tokio task. A store is a [`ResourceActor`] over some [`ActorEntity`]; the
//! rest of the application talks to it through a cloneable
//! [`ResourceClient`] (usually wrapped in a domain client implementing
//! [`ActorClient`]).
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the record type and its business rules.
//! 2. **Runtime** ([`ResourceActor`]) - the message loop owning the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async requests.
//!
//! Ids come from an [`IdGenerator`] chosen when the actor is built, so a store
//! can swap a counter for a random token without touching its callers.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, SequentialIds};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u64, seat: String }
//!
//! #[derive(Debug)] struct TicketCreate { seat: String }
//! #[derive(Debug)] struct TicketUpdate { seat: Option<String> }
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct TicketError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u64;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, seat: params.seat })
//!     }
//!
//!     async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(seat) = update.seat { self.seat = seat; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10, SequentialIds::new());
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(TicketCreate { seat: "A1".into() }).await.unwrap();
//!     let ticket = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(ticket.seat, "A1");
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of scripted responses,
//! and [`mock::create_mock_client`] hands the raw request channel to the test.
//! Either lets a domain client or a dependent actor be exercised without
//! spawning the real store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use message::{ResourceRequest, Response};

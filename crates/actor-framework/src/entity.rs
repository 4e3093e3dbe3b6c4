//! # ActorEntity Trait
//!
//! The contract a store's record type implements to be managed by a
//! [`ResourceActor`](crate::ResourceActor): associated types for its id, its
//! create/update payloads, its custom actions, the dependencies it needs at
//! runtime and its error type, plus async lifecycle hooks.
//!
//! Only [`ActorEntity::from_create_params`], [`ActorEntity::on_update`] and
//! [`ActorEntity::handle_action`] are required. `on_create` and `on_delete`
//! default to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so an entity can call other actors while handling a
/// request (an order notifying the notification store, for example). Those
/// other actors arrive through `Context`, injected by `ResourceActor::run`
/// rather than at construction, so actors can be created in any order.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Unique identifier. Produced by the actor's [`IdGenerator`](crate::IdGenerator).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies handed to every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity, covering every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly generated id and the create payload.
    /// Runs before `on_create`; returning an error aborts the create.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

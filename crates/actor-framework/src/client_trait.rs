//! # ActorClient Trait
//!
//! Domain clients wrap a [`ResourceClient`] to expose typed, intention-named
//! methods. Implementing [`ActorClient`] gives them the shared read and delete
//! operations for free, with framework errors mapped into the domain's own
//! error type.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Dish { id: u64 }
/// #[derive(Debug)] struct DishCreate;
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct DishError(String);
///
/// impl From<String> for DishError {
///     fn from(s: String) -> Self { DishError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Dish {
///     type Id = u64;
///     type Create = DishCreate;
///     type Update = ();
///     type Action = ();
///     type ActionResult = ();
///     type Context = ();
///     type Error = DishError;
///
///     fn from_create_params(id: u64, _: DishCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct DishClient {
///     inner: ResourceClient<Dish>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Dish> for DishClient {
///     type Error = DishError;
///
///     fn inner(&self) -> &ResourceClient<Dish> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         DishError(e.to_string())
///     }
/// }
///
/// async fn usage(client: DishClient) {
///     // get(), delete() and list() come from the trait
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}

//! # Cart Client
//!
//! Bound to one cart: every method acts on the cart the client was opened
//! with, so callers never handle a `CartId`.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartId, CartItem, CheckoutSnapshot, NewCartItem};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    cart_id: CartId,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

impl CartClient {
    /// Wraps an existing cart.
    pub fn new(inner: ResourceClient<Cart>, cart_id: CartId) -> Self {
        Self { inner, cart_id }
    }

    /// Creates a fresh, empty cart and binds the client to it.
    #[instrument(skip(inner))]
    pub async fn open(inner: ResourceClient<Cart>) -> Result<Self, CartError> {
        let cart_id = inner.create(CartCreate).await.map_err(Self::map_error)?;
        debug!(%cart_id, "Cart opened");
        Ok(Self::new(inner, cart_id))
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    async fn act(&self, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(self.cart_id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Adds one unit of `item`. Returns the line's new quantity.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: NewCartItem) -> Result<u32, CartError> {
        match self.act(CartAction::AddItem(item)).await? {
            CartActionResult::AddItem(quantity) => Ok(quantity),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Returns false if the cart had no such line.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: &str) -> Result<bool, CartError> {
        match self.act(CartAction::RemoveItem(id.to_string())).await? {
            CartActionResult::RemoveItem(removed) => Ok(removed),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Quantities below 1 are raised to 1. Returns false if the cart had no such line.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: &str, quantity: u32) -> Result<bool, CartError> {
        let action = CartAction::UpdateQuantity {
            id: id.to_string(),
            quantity,
        };
        match self.act(action).await? {
            CartActionResult::UpdateQuantity(found) => Ok(found),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        match self.act(CartAction::Clear).await? {
            CartActionResult::Clear(removed) => Ok(removed),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// The whole cart as it is right now.
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        self.get(self.cart_id).await?.ok_or_else(|| {
            CartError::ActorCommunicationError(format!("{} is gone", self.cart_id))
        })
    }

    pub async fn items(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(self.snapshot().await?.items().to_vec())
    }

    pub async fn total_price(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_price())
    }

    /// Units across all lines.
    pub async fn item_count(&self) -> Result<u32, CartError> {
        Ok(self.snapshot().await?.item_count())
    }

    /// Takes the checkout guard and returns the lines being paid for.
    ///
    /// # Errors
    /// [`CartError::Empty`], [`CartError::CheckoutInProgress`] or
    /// [`CartError::TotalTooLarge`].
    #[instrument(skip(self))]
    pub async fn begin_checkout(&self) -> Result<CheckoutSnapshot, CartError> {
        match self.act(CartAction::BeginCheckout).await? {
            CartActionResult::BeginCheckout(snapshot) => Ok(snapshot),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Empties the cart and releases the guard.
    #[instrument(skip(self))]
    pub async fn complete_checkout(&self) -> Result<usize, CartError> {
        match self.act(CartAction::CompleteCheckout).await? {
            CartActionResult::CompleteCheckout(removed) => Ok(removed),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Releases the guard and keeps the lines.
    #[instrument(skip(self))]
    pub async fn abort_checkout(&self) -> Result<(), CartError> {
        match self.act(CartAction::AbortCheckout).await? {
            CartActionResult::AbortCheckout => Ok(()),
            other => Err(CartError::UnexpectedResult(format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn rejected_checkout_comes_back_as_cart_error() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart = CartClient::new(client, CartId(1));

        let task = tokio::spawn(async move { cart.begin_checkout().await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        assert!(matches!(action, CartAction::BeginCheckout));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(CartError::Empty))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), CartError::Empty);
    }

    #[tokio::test]
    async fn closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1)).return_err(FrameworkError::ActorClosed);
        let cart = CartClient::new(mock.client(), CartId(1));

        let err = cart.add_item(NewCartItem::new("1", "Idli", 40)).await.unwrap_err();
        assert!(matches!(err, CartError::ActorCommunicationError(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_result_is_reported_not_panicked() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CartId(1)).return_ok(CartActionResult::Clear(0));
        let cart = CartClient::new(mock.client(), CartId(1));

        let err = cart.remove_item("1").await.unwrap_err();
        assert!(matches!(err, CartError::UnexpectedResult(_)));
    }
}

//! # Order Client
//!
//! Placing an order and moving it along. Payment settlement and the feed
//! entries happen inside the order actor's hooks, so a successful call here
//! means the notifications are already posted.

use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::Conflict(id)) => OrderError::DuplicateId(id),
            Err(e) => OrderError::ActorCommunicationError(e.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(total = params.total))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order = %id, "Order placed");
        Ok(id)
    }

    async fn advance(&self, id: OrderId, action: OrderAction) -> Result<OrderStatus, OrderError> {
        match self.inner.perform_action(id, action).await {
            Ok(OrderActionResult::Advanced { to, .. }) => Ok(to),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn start_preparing(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderAction::StartPreparing).await
    }

    /// Also posts the "ready for pickup" entry to the feed.
    ///
    /// # Errors
    /// [`OrderError::NotFound`] for an unknown id; nothing is posted then.
    #[instrument(skip(self))]
    pub async fn mark_ready(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderAction::MarkReady).await
    }

    #[instrument(skip(self))]
    pub async fn mark_picked_up(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderAction::MarkPickedUp).await
    }

    /// Orders not yet picked up, oldest first.
    pub async fn active_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .list()
            .await?
            .into_iter()
            .filter(|order| order.status.is_active())
            .collect();
        orders.sort_by_key(|order| order.placed_at);
        Ok(orders)
    }
}

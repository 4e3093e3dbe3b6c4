//! ActorEntity implementation for [`Order`].
//!
//! Placing an order settles its payment and posts two feed entries before the
//! order is stored. If either entry cannot be posted the create fails, no
//! order exists, and an entry that was already posted is withdrawn. Marking an order ready posts the pickup entry first and only
//! then changes the status.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use super::notices;
use crate::clients::NotificationClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, PaymentStatus};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = NotificationClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order {
            id,
            customer: params.customer,
            lines: params.lines,
            total: params.total,
            address: params.address,
            payment_method: params.payment_method,
            status: OrderStatus::Placed,
            payment: PaymentStatus::Pending,
            placed_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, notifications: &NotificationClient) -> Result<(), Self::Error> {
        self.payment = PaymentStatus::Succeeded;
        info!(order = %self.id, total = self.total, method = %self.payment_method, "Payment settled");

        let placed = notifications
            .add_notification(notices::order_placed(self))
            .await
            .map_err(|e| OrderError::NotificationFailed(e.to_string()))?;

        if let Err(e) = notifications
            .add_notification(notices::payment_success(self))
            .await
        {
            if let Err(cleanup) = notifications.delete(placed).await {
                warn!(order = %self.id, notification = %placed, error = %cleanup, "Could not withdraw order entry");
            }
            return Err(OrderError::NotificationFailed(e.to_string()));
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        notifications: &NotificationClient,
    ) -> Result<OrderActionResult, Self::Error> {
        let from = self.status;
        let to = action.target();
        if !from.can_advance_to(to) {
            warn!(order = %self.id, %from, %to, "Rejected status change");
            return Err(OrderError::InvalidTransition {
                order: self.id,
                from,
                to,
            });
        }

        if action == OrderAction::MarkReady {
            notifications
                .add_notification(notices::order_ready(self))
                .await
                .map_err(|e| OrderError::NotificationFailed(e.to_string()))?;
        }

        self.status = to;
        info!(order = %self.id, %from, %to, "Order advanced");
        Ok(OrderActionResult::Advanced { from, to })
    }
}

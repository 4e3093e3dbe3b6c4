//! ActorEntity implementation for [`Notification`].
//!
//! The store stamps the creation time and starts every entry unread. Content
//! is fixed at creation; the only action flips `read` from false to true.

use super::actions::{NotificationAction, NotificationActionResult};
use super::error::NotificationError;
use crate::model::{Notification, NotificationCreate, NotificationId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Notification {
    type Id = NotificationId;
    type Create = NotificationCreate;
    type Update = ();
    type Action = NotificationAction;
    type ActionResult = NotificationActionResult;
    type Context = ();
    type Error = NotificationError;

    fn from_create_params(
        id: NotificationId,
        params: NotificationCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Notification {
            id,
            kind: params.kind,
            title: params.title,
            message: params.message,
            created_at: Utc::now(),
            read: false,
            order_ref: params.order_ref,
            amount: params.amount,
            food_item: params.food_item,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: NotificationAction,
        _ctx: &Self::Context,
    ) -> Result<NotificationActionResult, Self::Error> {
        match action {
            NotificationAction::MarkAsRead => {
                let changed = !self.read;
                self.read = true;
                Ok(NotificationActionResult::MarkAsRead(changed))
            }
        }
    }
}

//! # Notification Client

use crate::model::{unread_count, Notification, NotificationCreate, NotificationId};
use crate::notification_actor::{NotificationAction, NotificationActionResult, NotificationError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct NotificationClient {
    inner: ResourceClient<Notification>,
}

#[async_trait]
impl ActorClient<Notification> for NotificationClient {
    type Error = NotificationError;

    fn inner(&self) -> &ResourceClient<Notification> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<NotificationError>()
            .unwrap_or_else(|e| NotificationError::ActorCommunicationError(e.to_string()))
    }
}

impl NotificationClient {
    pub fn new(inner: ResourceClient<Notification>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self), fields(kind = %notification.kind))]
    pub async fn add_notification(
        &self,
        notification: NotificationCreate,
    ) -> Result<NotificationId, NotificationError> {
        debug!("Sending request");
        self.inner
            .create(notification)
            .await
            .map_err(Self::map_error)
    }

    /// Returns whether the entry was unread. Unknown ids are not an error.
    #[instrument(skip(self))]
    pub async fn mark_as_read(&self, id: NotificationId) -> Result<bool, NotificationError> {
        match self.inner.perform_action(id, NotificationAction::MarkAsRead).await {
            Ok(NotificationActionResult::MarkAsRead(changed)) => Ok(changed),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Empties the feed. Returns how many entries were removed.
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<usize, NotificationError> {
        self.inner.clear().await.map_err(Self::map_error)
    }

    /// The feed, newest first.
    pub async fn feed(&self) -> Result<Vec<Notification>, NotificationError> {
        let mut feed = self.list().await?;
        feed.reverse();
        Ok(feed)
    }

    pub async fn unread_count(&self) -> Result<usize, NotificationError> {
        Ok(unread_count(&self.list().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationKind;
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    fn entry(id: u64, read: bool) -> Notification {
        Notification {
            id: NotificationId(id),
            kind: NotificationKind::OrderPlaced,
            title: "Order Placed!".into(),
            message: format!("entry {id}"),
            created_at: Utc::now(),
            read,
            order_ref: None,
            amount: None,
            food_item: None,
        }
    }

    #[tokio::test]
    async fn feed_is_newest_first() {
        let mut mock = MockClient::<Notification>::new();
        mock.expect_list()
            .return_ok(vec![entry(1, false), entry(2, true), entry(3, false)]);
        let client = NotificationClient::new(mock.client());

        let ids: Vec<u64> = client.feed().await.unwrap().iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        mock.verify();
    }

    #[tokio::test]
    async fn unread_count_ignores_read_entries() {
        let mut mock = MockClient::<Notification>::new();
        mock.expect_list()
            .return_ok(vec![entry(1, false), entry(2, true), entry(3, false)]);
        let client = NotificationClient::new(mock.client());

        assert_eq!(client.unread_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn marking_an_unknown_entry_is_a_no_op() {
        let mut mock = MockClient::<Notification>::new();
        mock.expect_action(NotificationId(9))
            .return_err(FrameworkError::NotFound("notification_9".into()));
        let client = NotificationClient::new(mock.client());

        assert!(!client.mark_as_read(NotificationId(9)).await.unwrap());
        mock.verify();
    }
}

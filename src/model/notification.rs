//! Lifecycle events shown in every dashboard's feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl From<u64> for NotificationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    OrderPlaced,
    OrderReady,
    PaymentSuccess,
    OrderReceived,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::OrderPlaced => "order_placed",
            NotificationKind::OrderReady => "order_ready",
            NotificationKind::PaymentSuccess => "payment_success",
            NotificationKind::OrderReceived => "order_received",
        }
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feed entry. Only `read` ever changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub order_ref: Option<String>,
    pub amount: Option<u64>,
    pub food_item: Option<String>,
}

impl Notification {
    /// How long ago the event happened, as the feed shows it.
    pub fn age(&self, now: DateTime<Utc>) -> String {
        format_relative(self.created_at, now)
    }
}

/// Payload for a new notification. Id, timestamp and `read` are set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCreate {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub order_ref: Option<String>,
    pub amount: Option<u64>,
    pub food_item: Option<String>,
}

impl NotificationCreate {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            order_ref: None,
            amount: None,
            food_item: None,
        }
    }

    pub fn with_order_ref(mut self, order_ref: impl Into<String>) -> Self {
        self.order_ref = Some(order_ref.into());
        self
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_food_item(mut self, food_item: impl Into<String>) -> Self {
        self.food_item = Some(food_item.into());
        self
    }
}

/// "Just now", "5m ago", "3h ago", "2d ago", or the date once a week has passed.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        at.format("%Y-%m-%d").to_string()
    }
}

/// Entries not yet marked read.
pub fn unread_count(feed: &[Notification]) -> usize {
    feed.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 9, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_time_thresholds() {
        let now = noon();
        assert_eq!(format_relative(now, now), "Just now");
        assert_eq!(format_relative(now - Duration::seconds(59), now), "Just now");
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1m ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_relative(now - Duration::minutes(60), now), "1h ago");
        assert_eq!(format_relative(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative(now - Duration::hours(24), now), "1d ago");
        assert_eq!(format_relative(now - Duration::days(6), now), "6d ago");
        assert_eq!(format_relative(now - Duration::days(7), now), "2025-01-02");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = noon();
        assert_eq!(format_relative(now + Duration::minutes(5), now), "Just now");
    }

    #[test]
    fn unread_count_is_derived_from_the_feed() {
        let make = |id, read| Notification {
            id: NotificationId(id),
            kind: NotificationKind::OrderPlaced,
            title: "t".into(),
            message: "m".into(),
            created_at: noon(),
            read,
            order_ref: None,
            amount: None,
            food_item: None,
        };
        let feed = vec![make(1, false), make(2, true), make(3, false)];
        assert_eq!(unread_count(&feed), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn kinds_serialize_in_snake_case() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Entry {
            kind: NotificationKind,
        }

        for kind in [
            NotificationKind::OrderPlaced,
            NotificationKind::OrderReady,
            NotificationKind::PaymentSuccess,
            NotificationKind::OrderReceived,
        ] {
            let encoded = toml::to_string(&Entry { kind }).unwrap();
            assert_eq!(encoded.trim(), format!("kind = \"{kind}\""));
            assert_eq!(toml::from_str::<Entry>(&encoded).unwrap(), Entry { kind });
        }

        assert_eq!(
            toml::from_str::<Entry>("kind = \"payment_success\"").unwrap().kind,
            NotificationKind::PaymentSuccess
        );
        assert!(toml::from_str::<Entry>("kind = \"PaymentSuccess\"").is_err());
    }
}

/// The only change a stored notification ever sees.
#[derive(Debug, Clone)]
pub enum NotificationAction {
    MarkAsRead,
}

#[derive(Debug, Clone)]
pub enum NotificationActionResult {
    /// Whether the entry was unread before.
    MarkAsRead(bool),
}

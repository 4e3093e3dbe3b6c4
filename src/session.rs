//! # Session Store
//!
//! The signed-in identity for this process. Unlike the other stores it is
//! not an actor: it is a [`watch`] cell, so readers always see the latest
//! value without a round trip and dashboards can wait for login or logout.

use crate::model::{Role, Session};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Holds at most one [`Session`]. Cheap to clone; clones share the cell.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<watch::Sender<Option<Session>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            current: Arc::new(current),
        }
    }

    /// Replaces any existing session.
    pub fn login(&self, role: Role, email: impl Into<String>) -> Session {
        let session = Session::new(role, email);
        info!(role = %session.role, email = %session.email, "Logged in");
        self.current.send_replace(Some(session.clone()));
        session
    }

    /// Returns the session that was ended, if any.
    pub fn logout(&self) -> Option<Session> {
        let ended = self.current.send_replace(None);
        if let Some(session) = &ended {
            info!(role = %session.role, email = %session.email, "Logged out");
        }
        ended
    }

    pub fn current_user(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    /// Sees every login and logout from now on.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }
}

//! # Menu Client

use crate::menu_actor::MenuError;
use crate::model::{Category, CategoryFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use crate::session::SessionStore;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Reads are open to everyone. Edits are checked against the session when
/// the client was built with [`MenuClient::editable_by`].
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
    editors: Option<SessionStore>,
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<MenuError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(e) => MenuError::ActorCommunicationError(e.to_string()),
        }
    }
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self {
            inner,
            editors: None,
        }
    }

    /// A client that only lets a signed-in chef or manager change the menu.
    pub fn editable_by(&self, session: SessionStore) -> Self {
        Self {
            inner: self.inner.clone(),
            editors: Some(session),
        }
    }

    fn check_editor(&self) -> Result<(), MenuError> {
        let Some(session) = &self.editors else {
            return Ok(());
        };
        match session.current_user() {
            None => Err(MenuError::NotLoggedIn),
            Some(user) if user.role.can_edit_menu() => Ok(()),
            Some(user) => {
                warn!(role = %user.role, "Menu edit refused");
                Err(MenuError::NotPermitted(user.role))
            }
        }
    }

    /// # Errors
    /// [`MenuError::Invalid`] for a blank name or a zero price, and
    /// [`MenuError::NotPermitted`] for a customer on a gated client.
    #[instrument(skip(self))]
    pub async fn add_menu_item(
        &self,
        name: &str,
        price: u64,
        category: Category,
    ) -> Result<MenuItemId, MenuError> {
        self.add(MenuItemCreate::new(name, price, category)).await
    }

    pub async fn add(&self, item: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        self.check_editor()?;
        debug!(name = %item.name, "Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        self.check_editor()?;
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns false if there was no such dish.
    #[instrument(skip(self))]
    pub async fn remove_menu_item(&self, id: MenuItemId) -> Result<bool, MenuError> {
        self.check_editor()?;
        match self.inner.delete(id).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    pub async fn by_category(&self, filter: CategoryFilter) -> Result<Vec<MenuItem>, MenuError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect())
    }
}

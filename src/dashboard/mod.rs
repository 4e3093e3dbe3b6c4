//! # Dashboards
//!
//! What each role sees after logging in. [`DashboardService::load`] matches
//! on the session's [`Role`]; there is no dashboard without a session.

mod sales;

pub use sales::*;

use crate::cart_actor::CartError;
use crate::clients::{ActorClient, CartClient, MenuClient, NotificationClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{
    unread_count, CartItem, CategoryFilter, MenuItem, Notification, Order, Role, Session,
};
use crate::notification_actor::NotificationError;
use crate::order_actor::OrderError;
use crate::session::SessionStore;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error("Please log in")]
    NotLoggedIn,

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Debug, Clone)]
pub struct CustomerDashboard {
    pub menu: Vec<MenuItem>,
    pub cart: Vec<CartItem>,
    pub cart_total: u64,
    pub unread: usize,
    /// Newest first.
    pub feed: Vec<Notification>,
}

#[derive(Debug, Clone)]
pub struct ChefDashboard {
    /// Not yet picked up, oldest first.
    pub active_orders: Vec<Order>,
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone)]
pub struct ManagerDashboard {
    pub menu: Vec<MenuItem>,
    pub sales: SalesSummary,
}

#[derive(Debug, Clone)]
pub enum DashboardView {
    Customer(CustomerDashboard),
    Chef(ChefDashboard),
    Manager(ManagerDashboard),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub session: Session,
    pub view: DashboardView,
}

#[derive(Clone)]
pub struct DashboardService {
    session: SessionStore,
    menu: MenuClient,
    cart: CartClient,
    notifications: NotificationClient,
    orders: OrderClient,
}

impl DashboardService {
    pub fn new(
        session: SessionStore,
        menu: MenuClient,
        cart: CartClient,
        notifications: NotificationClient,
        orders: OrderClient,
    ) -> Self {
        Self {
            session,
            menu,
            cart,
            notifications,
            orders,
        }
    }

    /// Builds the signed-in role's dashboard. `filter` narrows the customer's menu.
    #[instrument(skip(self))]
    pub async fn load(&self, filter: CategoryFilter) -> Result<Dashboard, DashboardError> {
        let session = self.session.current_user().ok_or(DashboardError::NotLoggedIn)?;
        debug!(role = %session.role, "Loading dashboard");

        let view = match session.role {
            Role::Customer => {
                let cart = self.cart.snapshot().await?;
                let feed = self.notifications.feed().await?;
                DashboardView::Customer(CustomerDashboard {
                    menu: self.menu.by_category(filter).await?,
                    cart_total: cart.total_price(),
                    cart: cart.items().to_vec(),
                    unread: unread_count(&feed),
                    feed,
                })
            }
            Role::Chef => DashboardView::Chef(ChefDashboard {
                active_orders: self.orders.active_orders().await?,
                menu: self.menu.list().await?,
            }),
            Role::Manager => DashboardView::Manager(ManagerDashboard {
                menu: self.menu.list().await?,
                sales: SalesSummary::from_orders(&self.orders.list().await?),
            }),
        };
        Ok(Dashboard { session, view })
    }
}

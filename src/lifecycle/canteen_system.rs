use crate::cart_actor::CartError;
use crate::checkout::CheckoutService;
use crate::clients::{CartClient, MenuClient, NotificationClient, OrderClient};
use crate::config::CanteenConfig;
use crate::dashboard::DashboardService;
use crate::menu_actor::MenuError;
use crate::model::default_catalog;
use crate::session::SessionStore;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to seed the menu: {0}")]
    Seed(#[from] MenuError),

    #[error("Failed to open the cart: {0}")]
    Cart(#[from] CartError),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Every store of one canteen, running.
///
/// Built once by [`CanteenSystem::start`] and passed around by reference;
/// the services hold cheap client clones.
///
/// ```rust
/// use canteen::config::CanteenConfig;
/// use canteen::lifecycle::CanteenSystem;
/// use canteen::model::{NewCartItem, PaymentMethod, Role};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = CanteenConfig { checkout_delay_ms: 0, ..CanteenConfig::default() };
///     let system = CanteenSystem::start(config).await?;
///
///     system.session.login(Role::Customer, "student@college.edu");
///     system.cart.add_item(NewCartItem::new("1", "Paneer Tikka", 180)).await?;
///     let order = system.checkout.submit_order("Campus Rd", PaymentMethod::Upi, "a@upi").await?;
///     assert_eq!(order.to_string(), "#0001");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CanteenSystem {
    pub config: CanteenConfig,
    pub session: SessionStore,
    pub menu: MenuClient,
    pub cart: CartClient,
    pub notifications: NotificationClient,
    pub orders: OrderClient,
    pub checkout: CheckoutService,
    pub dashboards: DashboardService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CanteenSystem {
    /// Spawns every store actor, seeds the menu and opens the cart.
    pub async fn start(config: CanteenConfig) -> Result<Self, SystemError> {
        let buffer = config.channel_buffer;

        // 1. Create actors (no dependencies)
        let (menu_actor, menu_client) = crate::menu_actor::new(buffer);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer);
        let (notification_actor, notification_client) = crate::notification_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer, config.order_ids);

        let menu = MenuClient::new(menu_client);
        let notifications = NotificationClient::new(notification_client);
        let orders = OrderClient::new(order_client);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(notification_actor.run(())),
            tokio::spawn(order_actor.run(notifications.clone())),
        ];

        if config.seed_menu {
            for dish in default_catalog() {
                menu.add(dish).await?;
            }
        }
        let cart = CartClient::open(cart_client).await?;

        let session = SessionStore::new();
        let menu = menu.editable_by(session.clone());
        let checkout = CheckoutService::new(
            cart.clone(),
            orders.clone(),
            session.clone(),
            config.checkout_delay(),
        );
        let dashboards = DashboardService::new(
            session.clone(),
            menu.clone(),
            cart.clone(),
            notifications.clone(),
            orders.clone(),
        );

        info!(?config, "Canteen started");
        Ok(Self {
            config,
            session,
            menu,
            cart,
            notifications,
            orders,
            checkout,
            dashboards,
            handles,
        })
    }

    /// Drops every client and waits for the actors to drain.
    ///
    /// The order actor holds a notification client in its context, so the
    /// notification actor stops only after the order actor has.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down canteen...");
        let Self {
            config: _,
            session,
            menu,
            cart,
            notifications,
            orders,
            checkout,
            dashboards,
            handles,
        } = self;

        // Dropping the clients closes the channels; each actor then leaves its loop.
        drop(checkout);
        drop(dashboards);
        drop(session);
        drop(menu);
        drop(cart);
        drop(notifications);
        drop(orders);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Canteen shutdown complete.");
        Ok(())
    }
}

//! # Canteen demo
//!
//! Starts a canteen and walks one order from cart to pickup, logging each
//! step. Configuration comes from `CANTEEN_CONFIG` (a TOML file) and the
//! `CANTEEN_*` variables; see [`canteen::config`].
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use canteen::config::CanteenConfig;
use canteen::dashboard::DashboardView;
use canteen::lifecycle::{setup_tracing, CanteenSystem};
use canteen::model::{Category, CategoryFilter, NewCartItem, PaymentMethod, Role};
use chrono::Utc;
use std::error::Error;
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = CanteenConfig::load()?;
    let system = CanteenSystem::start(config).await?;

    // Customer: fill the cart and pay
    let order_id = async {
        system.session.login(Role::Customer, "student@college.edu");

        let veg = system.menu.by_category(Category::Veg.into()).await?;
        for dish in veg.iter().take(2) {
            system.cart.add_item(NewCartItem::from(dish)).await?;
        }
        if let Some(first) = veg.first() {
            system.cart.add_item(NewCartItem::from(first)).await?;
        }
        info!(
            units = system.cart.item_count().await?,
            total = system.cart.total_price().await?,
            "Cart ready"
        );

        if let Err(e) = system
            .checkout
            .submit_order("", PaymentMethod::Upi, "student@upi")
            .await
        {
            warn!(error = %e, "Checkout refused");
        }

        let order_id = system
            .checkout
            .submit_order("Hostel 4, Room 12", PaymentMethod::Upi, "student@upi")
            .await?;
        info!(order = %order_id, "Order confirmed");
        Ok::<_, Box<dyn Error>>(order_id)
    }
    .instrument(info_span!("customer"))
    .await?;

    // Chef: cook it
    async {
        system.session.login(Role::Chef, "chef@college.edu");
        let dashboard = system.dashboards.load(CategoryFilter::All).await?;
        if let DashboardView::Chef(view) = &dashboard.view {
            for order in &view.active_orders {
                info!(order = %order.id, items = %order.summary(), "In the queue");
            }
        }
        system.orders.start_preparing(order_id).await?;
        system.orders.mark_ready(order_id).await?;
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(info_span!("chef"))
    .await?;

    // Customer: read the feed and collect
    async {
        system.session.login(Role::Customer, "student@college.edu");
        let now = Utc::now();
        for entry in system.notifications.feed().await? {
            info!(kind = %entry.kind, age = %entry.age(now), "{}", entry.message);
            system.notifications.mark_as_read(entry.id).await?;
        }
        system.orders.mark_picked_up(order_id).await?;
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(info_span!("pickup"))
    .await?;

    // Manager: the day's takings
    async {
        system.session.login(Role::Manager, "manager@college.edu");
        let dashboard = system.dashboards.load(CategoryFilter::All).await?;
        if let DashboardView::Manager(view) = &dashboard.view {
            for t in &view.sales.transactions {
                info!(order = %t.order_ref, customer = %t.customer, amount = t.amount, status = %t.status, "Transaction");
            }
            info!(
                revenue = view.sales.total_revenue,
                completed = view.sales.completed,
                dishes = view.menu.len(),
                "Sales summary"
            );
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(info_span!("manager"))
    .await?;

    system.session.logout();
    system.shutdown().await?;
    info!("Demo complete");
    Ok(())
}

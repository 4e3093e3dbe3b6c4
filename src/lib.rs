//! # Canteen
//!
//! > **The ordering core of a college canteen, as a set of in-process actors.**
//!
//! Customers fill a cart from the menu and check out; the kitchen moves the
//! order to "ready"; the customer picks it up. Every step lands in a
//! notification feed that all three dashboards (customer, chef, manager) read.
//! State lives in memory only and is gone when the process exits.
//!
//! ## 🏗️ Design
//!
//! Each store is a [`ResourceActor`](actor_framework::ResourceActor) from the
//! `actor-framework` crate: one Tokio task owning the store, processing
//! requests one at a time. No store state is behind a lock.
//!
//! - **Menu**, **cart** and **notifications** have no dependencies.
//! - **Orders** run with a notification client as context and post every
//!   feed entry about an order themselves.
//! - The **session** is a `watch` cell rather than an actor.
//!
//! The only wait in the system is the simulated payment delay in
//! [`checkout`]. While it runs, other requests proceed and a second checkout
//! of the same cart is refused.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Data ([`model`])
//! Plain types and the pure rules on them: cart arithmetic, order status
//! transitions, menu filters, relative timestamps.
//!
//! ### 2. Stores ([`cart_actor`], [`menu_actor`], [`notification_actor`], [`order_actor`], [`session`])
//! `ActorEntity` implementations, actions and one error enum per store.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers over the generic client, e.g.
//! [`CartClient`](clients::CartClient), which is bound to a single cart.
//!
//! ### 4. Workflows ([`checkout`], [`dashboard`])
//! Checkout validation, the in-flight guard and the cancellable delay;
//! the per-role dashboards.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`CanteenSystem`](lifecycle::CanteenSystem) starts and wires everything
//! from a [`CanteenConfig`](config::CanteenConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use canteen::config::CanteenConfig;
//! use canteen::lifecycle::CanteenSystem;
//! use canteen::model::{CategoryFilter, PaymentMethod, Role};
//! use canteen::dashboard::DashboardView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CanteenConfig { checkout_delay_ms: 0, ..CanteenConfig::default() };
//!     let system = CanteenSystem::start(config).await?;
//!     system.session.login(Role::Customer, "student@college.edu");
//!
//!     let dashboard = system.dashboards.load(CategoryFilter::All).await?;
//!     let DashboardView::Customer(view) = dashboard.view else { unreachable!() };
//!     system.cart.add_item((&view.menu[0]).into()).await?;
//!
//!     let order = system.checkout.submit_order("Hostel 4", PaymentMethod::GPay, "9876543210").await?;
//!     system.orders.mark_ready(order).await?;
//!     assert_eq!(system.notifications.unread_count().await?, 3);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod notification_actor;
pub mod order_actor;
pub mod session;

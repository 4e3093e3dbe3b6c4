//! The whole canteen, wired by `CanteenSystem`, driven through its clients.

use canteen::clients::ActorClient;
use canteen::config::CanteenConfig;
use canteen::dashboard::{DashboardError, DashboardView, TransactionStatus};
use canteen::error::ValidationError;
use canteen::lifecycle::CanteenSystem;
use canteen::menu_actor::MenuError;
use canteen::model::{
    Category, CategoryFilter, MenuItemId, MenuItemUpdate, NewCartItem, NotificationCreate,
    NotificationId, NotificationKind, OrderStatus, PaymentMethod, Role,
};

fn instant_checkout() -> CanteenConfig {
    CanteenConfig {
        checkout_delay_ms: 0,
        ..CanteenConfig::default()
    }
}

#[tokio::test]
async fn menu_starts_with_the_catalog_and_accepts_edits() {
    let system = CanteenSystem::start(instant_checkout()).await.unwrap();

    assert_eq!(system.menu.list().await.unwrap().len(), 13);
    let veg = system.menu.by_category(Category::Veg.into()).await.unwrap();
    assert_eq!(veg.len(), 6);
    assert!(veg.iter().all(|dish| dish.category == Category::Veg));
    assert_eq!(
        system.menu.by_category(Category::Combo.into()).await.unwrap().len(),
        2
    );

    // Browsing needs no login, editing needs a chef or manager
    let err = system
        .menu
        .add_menu_item("Masala Chai", 20, Category::Special)
        .await
        .unwrap_err();
    assert_eq!(err, MenuError::NotLoggedIn);
    system.session.login(Role::Customer, "student@college.edu");
    let err = system.menu.remove_menu_item(MenuItemId(1)).await.unwrap_err();
    assert_eq!(err, MenuError::NotPermitted(Role::Customer));
    assert_eq!(system.menu.list().await.unwrap().len(), 13);

    system.session.login(Role::Chef, "chef@college.edu");
    let tea = system
        .menu
        .add_menu_item("Masala Chai", 20, Category::Special)
        .await
        .unwrap();
    let updated = system
        .menu
        .update_menu_item(
            tea,
            MenuItemUpdate {
                price: Some(25),
                ..MenuItemUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 25);
    assert_eq!(system.menu.list().await.unwrap().last().unwrap().name, "Masala Chai");

    assert!(system.menu.remove_menu_item(tea).await.unwrap());
    assert!(!system.menu.remove_menu_item(tea).await.unwrap());
    assert_eq!(system.menu.list().await.unwrap().len(), 13);

    let err = system
        .menu
        .add_menu_item("", 20, Category::Veg)
        .await
        .unwrap_err();
    assert_eq!(err, MenuError::Invalid(ValidationError::MissingDishName));
    let err = system
        .menu
        .add_menu_item("Water", 0, Category::Special)
        .await
        .unwrap_err();
    assert_eq!(err, MenuError::Invalid(ValidationError::InvalidPrice));

    system.session.login(Role::Manager, "manager@college.edu");
    assert!(system.menu.remove_menu_item(MenuItemId(13)).await.unwrap());
    assert_eq!(system.menu.list().await.unwrap().len(), 12);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn seeding_can_be_turned_off() {
    let config = CanteenConfig {
        seed_menu: false,
        ..instant_checkout()
    };
    let system = CanteenSystem::start(config).await.unwrap();
    assert!(system.menu.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cart_arithmetic() {
    let system = CanteenSystem::start(instant_checkout()).await.unwrap();
    let cart = &system.cart;

    assert_eq!(cart.add_item(NewCartItem::new("1", "Paneer Tikka", 180)).await.unwrap(), 1);
    assert_eq!(cart.add_item(NewCartItem::new("1", "Paneer Tikka", 180)).await.unwrap(), 2);
    cart.add_item(NewCartItem::new("5", "Idli", 40)).await.unwrap();

    let items = cart.items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(cart.total_price().await.unwrap(), 2 * 180 + 40);
    assert_eq!(cart.item_count().await.unwrap(), 3);

    assert!(cart.update_quantity("5", 0).await.unwrap());
    assert_eq!(cart.items().await.unwrap()[1].quantity, 1);
    assert!(!cart.update_quantity("missing", 4).await.unwrap());

    assert!(cart.remove_item("1").await.unwrap());
    assert!(!cart.remove_item("1").await.unwrap());
    assert_eq!(cart.total_price().await.unwrap(), 40);

    assert_eq!(cart.clear().await.unwrap(), 1);
    assert_eq!(cart.total_price().await.unwrap(), 0);
}

#[tokio::test]
async fn notification_feed_bookkeeping() {
    let system = CanteenSystem::start(instant_checkout()).await.unwrap();
    let feed = &system.notifications;

    let first = feed
        .add_notification(NotificationCreate::new(
            NotificationKind::OrderReceived,
            "Order Received",
            "Kitchen has your order",
        ))
        .await
        .unwrap();
    let second = feed
        .add_notification(
            NotificationCreate::new(NotificationKind::OrderReady, "Order Ready!", "Come get it")
                .with_food_item("Idli"),
        )
        .await
        .unwrap();
    assert_ne!(first, second);

    let entries = feed.feed().await.unwrap();
    assert_eq!(entries[0].id, second);
    assert_eq!(entries[0].food_item.as_deref(), Some("Idli"));
    assert_eq!(feed.unread_count().await.unwrap(), 2);

    assert!(feed.mark_as_read(first).await.unwrap());
    assert!(!feed.mark_as_read(first).await.unwrap());
    assert!(!feed.mark_as_read(NotificationId(404)).await.unwrap());
    assert_eq!(feed.unread_count().await.unwrap(), 1);

    assert_eq!(feed.clear_all().await.unwrap(), 2);
    assert!(feed.feed().await.unwrap().is_empty());
    assert_eq!(feed.unread_count().await.unwrap(), 0);
}

#[tokio::test]
async fn dashboards_follow_the_session() {
    let system = CanteenSystem::start(instant_checkout()).await.unwrap();

    let err = system.dashboards.load(CategoryFilter::All).await.unwrap_err();
    assert_eq!(err, DashboardError::NotLoggedIn);

    // Customer orders twice
    system.session.login(Role::Customer, "student@college.edu");
    let menu = system.menu.list().await.unwrap();
    system.cart.add_item((&menu[0]).into()).await.unwrap();
    let first = system
        .checkout
        .submit_order("Hostel 4", PaymentMethod::Upi, "s@upi")
        .await
        .unwrap();
    system.cart.add_item((&menu[6]).into()).await.unwrap();
    system.cart.add_item((&menu[6]).into()).await.unwrap();
    let second = system
        .checkout
        .submit_order("Library", PaymentMethod::GPay, "9876543210")
        .await
        .unwrap();

    let dashboard = system
        .dashboards
        .load(Category::NonVeg.into())
        .await
        .unwrap();
    let DashboardView::Customer(view) = dashboard.view else {
        panic!("expected the customer dashboard");
    };
    assert_eq!(view.menu.len(), 3);
    assert!(view.cart.is_empty());
    assert_eq!(view.cart_total, 0);
    assert_eq!(view.feed.len(), 4);
    assert_eq!(view.unread, 4);

    // Chef sees both, oldest first, until pickup
    system.session.login(Role::Chef, "chef@college.edu");
    let DashboardView::Chef(view) = system.dashboards.load(CategoryFilter::All).await.unwrap().view
    else {
        panic!("expected the chef dashboard");
    };
    let queue: Vec<_> = view.active_orders.iter().map(|o| o.id).collect();
    assert_eq!(queue, vec![first, second]);
    assert_eq!(view.menu.len(), 13);

    assert_eq!(system.orders.mark_ready(first).await.unwrap(), OrderStatus::Ready);
    assert_eq!(system.orders.mark_picked_up(first).await.unwrap(), OrderStatus::PickedUp);
    let active = system.orders.active_orders().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second);

    // Manager sees both payments
    system.session.login(Role::Manager, "manager@college.edu");
    let DashboardView::Manager(view) =
        system.dashboards.load(CategoryFilter::All).await.unwrap().view
    else {
        panic!("expected the manager dashboard");
    };
    assert_eq!(view.sales.completed, 2);
    assert_eq!(view.sales.total_revenue, menu[0].price + 2 * menu[6].price);
    assert!(view
        .sales
        .transactions
        .iter()
        .all(|t| t.status == TransactionStatus::Completed && t.customer == "student@college.edu"));

    let ready = &system.notifications.feed().await.unwrap()[0];
    assert_eq!(ready.kind, NotificationKind::OrderReady);
    assert_eq!(ready.title, "Order Ready!");

    system.session.logout();
    assert_eq!(
        system.dashboards.load(CategoryFilter::All).await.unwrap_err(),
        DashboardError::NotLoggedIn
    );
    system.shutdown().await.unwrap();
}

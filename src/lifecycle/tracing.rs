//! # Logging
//!
//! Every store actor logs its lifecycle and each request with an
//! `entity_type` field, and the domain clients open a span per call. One
//! checkout at `RUST_LOG=info`:
//!
//! ```text
//! INFO Checkout started cart=cart_1 total=360 method=UPI
//! INFO Payment settled order=#0001 total=360 method=UPI
//! INFO Created entity_type="Notification" id=notification_1 size=1
//! INFO Created entity_type="Notification" id=notification_2 size=2
//! INFO Created entity_type="Order" id=#0001 size=1
//! INFO checkout{cart=cart_1}:place_order{total=360}: Order placed order=#0001
//! INFO checkout{cart=cart_1}: Checkout complete order=#0001
//! ```
//!
//! The level comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run            # one line per step
//! RUST_LOG=debug cargo run           # request payloads too
//! RUST_LOG=canteen=debug,actor_framework=warn cargo run
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}

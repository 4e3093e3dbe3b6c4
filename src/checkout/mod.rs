//! # Checkout
//!
//! Turns the cart into an order. The workflow is:
//!
//! 1. Check the form: delivery address, then the credential for the chosen
//!    payment method. Nothing is touched if either is missing.
//! 2. Take the cart's checkout guard. This fails for an empty cart, or when
//!    another checkout is already waiting.
//! 3. Wait out the simulated payment delay.
//! 4. Place the order. The order store settles payment and posts the
//!    `order_placed` and `payment_success` entries.
//! 5. Clear the cart and release the guard.
//!
//! Steps 3 to 5 run on their own task behind a [`PendingCheckout`], which can
//! be awaited or cancelled. Cancelling during the delay releases the guard
//! and leaves the cart and the feed as they were. If placing the order fails,
//! the guard is released and the cart is kept.

mod error;

pub use error::*;

use crate::clients::{CartClient, OrderClient};
use crate::error::ValidationError;
use crate::model::{CheckoutSnapshot, OrderCreate, OrderId, PaymentMethod};
use crate::session::SessionStore;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, info_span, warn, Instrument};

/// Customer recorded on orders placed without a session.
const GUEST: &str = "guest";

/// What the checkout form collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub address: String,
    pub payment_method: PaymentMethod,
    /// UPI id or phone number, depending on `payment_method`.
    pub credential: String,
}

impl CheckoutRequest {
    pub fn new(
        address: impl Into<String>,
        payment_method: PaymentMethod,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            payment_method,
            credential: credential.into(),
        }
    }

    /// Address first, then credential. Only emptiness is checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        if self.credential.trim().is_empty() {
            return Err(ValidationError::MissingCredential(self.payment_method));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct CheckoutService {
    cart: CartClient,
    orders: OrderClient,
    session: SessionStore,
    delay: Duration,
}

impl CheckoutService {
    pub fn new(
        cart: CartClient,
        orders: OrderClient,
        session: SessionStore,
        delay: Duration,
    ) -> Self {
        Self {
            cart,
            orders,
            session,
            delay,
        }
    }

    /// Places an order for the whole cart and waits for it.
    pub async fn submit_order(
        &self,
        address: &str,
        payment_method: PaymentMethod,
        credential: &str,
    ) -> Result<OrderId, CheckoutError> {
        let request = CheckoutRequest::new(address, payment_method, credential);
        self.begin_checkout(request).await?.await
    }

    /// Validates, takes the cart guard and starts the payment delay.
    ///
    /// Every rejection happens here, before the delay, with the cart and the
    /// feed untouched.
    pub async fn begin_checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<PendingCheckout, CheckoutError> {
        if let Err(e) = request.validate() {
            warn!(field = e.field(), "Checkout rejected");
            return Err(e.into());
        }
        let snapshot = self.cart.begin_checkout().await.map_err(|e| {
            warn!(error = %e, "Checkout rejected");
            CheckoutError::from(e)
        })?;

        let customer = self
            .session
            .current_user()
            .map(|session| session.email)
            .unwrap_or_else(|| GUEST.to_string());
        info!(
            cart = %self.cart.cart_id(),
            total = snapshot.total,
            method = %request.payment_method,
            "Checkout started"
        );

        let (cancel, cancelled) = oneshot::channel();
        let span = info_span!("checkout", cart = %self.cart.cart_id());
        let task = run_checkout(
            self.cart.clone(),
            self.orders.clone(),
            self.delay,
            cancelled,
            OrderCreate {
                customer,
                lines: snapshot.items.clone(),
                total: snapshot.total,
                address: request.address.trim().to_string(),
                payment_method: request.payment_method,
            },
        );

        Ok(PendingCheckout {
            snapshot,
            cancel: Some(cancel),
            task: tokio::spawn(task.instrument(span)),
        })
    }
}

async fn run_checkout(
    cart: CartClient,
    orders: OrderClient,
    delay: Duration,
    cancelled: oneshot::Receiver<()>,
    order: OrderCreate,
) -> Result<OrderId, CheckoutError> {
    // A dropped handle is not a cancel; only an explicit signal stops the wait.
    tokio::select! {
        _ = tokio::time::sleep(delay) => {}
        Ok(()) = cancelled => {
            cart.abort_checkout().await?;
            info!("Checkout cancelled");
            return Err(CheckoutError::Cancelled);
        }
    }

    let id = match orders.place_order(order).await {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Placing order failed, keeping cart");
            cart.abort_checkout().await?;
            return Err(e.into());
        }
    };
    cart.complete_checkout().await?;
    info!(order = %id, "Checkout complete");
    Ok(id)
}

/// A checkout waiting out its payment delay.
///
/// Await it for the order id, or [`cancel`](PendingCheckout::cancel) it.
/// Dropping the handle lets the checkout finish on its own.
pub struct PendingCheckout {
    snapshot: CheckoutSnapshot,
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<OrderId, CheckoutError>>,
}

impl PendingCheckout {
    /// The lines and total being paid for.
    pub fn snapshot(&self) -> &CheckoutSnapshot {
        &self.snapshot
    }

    /// Stops the checkout if the delay has not ended yet.
    ///
    /// Returns `None` when cancelled in time, or the id of the order that was
    /// already placed.
    pub async fn cancel(mut self) -> Result<Option<OrderId>, CheckoutError> {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        match self.await {
            Ok(id) => Ok(Some(id)),
            Err(CheckoutError::Cancelled) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Future for PendingCheckout {
    type Output = Result<OrderId, CheckoutError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| {
            joined.unwrap_or_else(|e| Err(CheckoutError::Interrupted(e.to_string())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::CartError;

    #[test]
    fn address_is_checked_before_credential() {
        let request = CheckoutRequest::new("  ", PaymentMethod::GPay, "");
        assert_eq!(request.validate(), Err(ValidationError::MissingAddress));

        let request = CheckoutRequest::new("Campus Rd", PaymentMethod::GPay, " ");
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingCredential(PaymentMethod::GPay))
        );
        assert!(CheckoutRequest::new("Campus Rd", PaymentMethod::Upi, "a@upi")
            .validate()
            .is_ok());
    }

    #[test]
    fn cart_rejections_become_checkout_errors() {
        assert_eq!(
            CheckoutError::from(CartError::Empty),
            CheckoutError::Validation(ValidationError::EmptyCart)
        );
        assert_eq!(
            CheckoutError::from(CartError::CheckoutInProgress("cart_1".into())),
            CheckoutError::InProgress
        );
        assert_eq!(
            CheckoutError::Validation(ValidationError::EmptyCart).to_string(),
            "Your cart is empty"
        );
    }
}

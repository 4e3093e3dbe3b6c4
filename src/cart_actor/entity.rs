//! ActorEntity implementation for [`Cart`].

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::{Cart, CartCreate, CartId, CheckoutRefusal};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<CartActionResult, Self::Error> {
        let result = match action {
            CartAction::AddItem(item) => CartActionResult::AddItem(self.add_item(item)),
            CartAction::RemoveItem(id) => CartActionResult::RemoveItem(self.remove_item(&id)),
            CartAction::UpdateQuantity { id, quantity } => {
                CartActionResult::UpdateQuantity(self.update_quantity(&id, quantity))
            }
            CartAction::Clear => CartActionResult::Clear(self.clear()),
            CartAction::BeginCheckout => {
                let snapshot = self.begin_checkout().map_err(|refusal| match refusal {
                    CheckoutRefusal::InProgress => CartError::CheckoutInProgress(self.id.to_string()),
                    CheckoutRefusal::Empty => CartError::Empty,
                    CheckoutRefusal::TotalTooLarge => CartError::TotalTooLarge,
                })?;
                CartActionResult::BeginCheckout(snapshot)
            }
            CartAction::CompleteCheckout => {
                CartActionResult::CompleteCheckout(self.complete_checkout())
            }
            CartAction::AbortCheckout => {
                self.abort_checkout();
                CartActionResult::AbortCheckout
            }
        };
        debug!(cart = %self.id, lines = self.items().len(), total = self.total_price(), "Cart changed");
        Ok(result)
    }
}

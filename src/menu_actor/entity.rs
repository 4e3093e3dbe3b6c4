//! ActorEntity implementation for [`MenuItem`].
//!
//! Dishes are checked on the way in and on every edit: a name that is blank
//! after trimming, or a zero price, never reaches the menu.

use super::error::MenuError;
use crate::error::ValidationError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn check_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingDishName);
    }
    Ok(name.to_string())
}

fn check_price(price: u64) -> Result<u64, ValidationError> {
    if price == 0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        Ok(MenuItem {
            id,
            name: check_name(&params.name)?,
            price: check_price(params.price)?,
            category: params.category,
            image_ref: params.image_ref,
        })
    }

    /// Applies every field that is set. Nothing changes if any field is invalid.
    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let name = update.name.as_deref().map(check_name).transpose()?;
        let price = update.price.map(check_price).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn blank_names_and_zero_prices_are_rejected() {
        let blank = MenuItemCreate::new("   ", 50, Category::Veg);
        let free = MenuItemCreate::new("Tea", 0, Category::Special);

        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), blank).unwrap_err(),
            MenuError::Invalid(ValidationError::MissingDishName)
        );
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(2), free).unwrap_err(),
            MenuError::Invalid(ValidationError::InvalidPrice)
        );
    }

    #[tokio::test]
    async fn invalid_update_leaves_the_dish_unchanged() {
        let create = MenuItemCreate::new(" Masala Dosa ", 100, Category::Veg);
        let mut dish = MenuItem::from_create_params(MenuItemId(1), create).unwrap();
        assert_eq!(dish.name, "Masala Dosa");

        let update = MenuItemUpdate {
            name: Some("Ghee Dosa".into()),
            price: Some(0),
            category: None,
        };
        assert!(dish.on_update(update, &()).await.is_err());
        assert_eq!(dish.name, "Masala Dosa");
        assert_eq!(dish.price, 100);
    }
}

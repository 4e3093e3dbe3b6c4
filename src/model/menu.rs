//! Dishes on the canteen menu.
//!
//! # Actor Framework
//! Managed by the menu actor; see [`crate::menu_actor`] for the
//! `ActorEntity` implementation and [`crate::clients::MenuClient`] for the API.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for menu items. Rendered as a bare number, which is
/// also the id a dish carries into the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u64);

impl From<u64> for MenuItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Combo,
    Special,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Veg,
        Category::NonVeg,
        Category::Combo,
        Category::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Veg => "Veg",
            Category::NonVeg => "Non-Veg",
            Category::Combo => "Combo",
            Category::Special => "Special",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The category tabs on the customer menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    /// Whole rupees.
    pub price: u64,
    pub category: Category,
    pub image_ref: Option<String>,
}

/// Payload for adding a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub image_ref: Option<String>,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, price: u64, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
            image_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

// DTOs for menu updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub category: Option<Category>,
}

/// The dishes the canteen opens with.
pub fn default_catalog() -> Vec<MenuItemCreate> {
    use Category::*;
    [
        ("Paneer Tikka", 180, Veg, "/paneer-tikka.png"),
        ("Masala Dosa", 100, Veg, "/masala-dosa.png"),
        ("Crispy Dosa", 80, Veg, "/crispy-dosa.png"),
        ("Chole Bhature", 120, Veg, "/chole-bhature.jpg"),
        ("Idli", 40, Veg, "/fluffy-idli.png"),
        ("Vada Pav", 60, Veg, "/vada-pav.png"),
        ("Chicken Biryani", 200, NonVeg, "/flavorful-biryani.png"),
        ("Butter Chicken", 250, NonVeg, "/butter-chicken.png"),
        ("Tandoori Chicken", 220, NonVeg, "/tandoori-chicken.png"),
        ("Biryani + Raita Combo", 230, Combo, "/flavorful-biryani.png"),
        ("Meal Combo", 180, Combo, "/pulao.jpg"),
        ("Samosa (3 pcs)", 30, Special, "/crispy-golden-samosas.png"),
        ("Garlic Naan", 50, Special, "/naan-bread.png"),
    ]
    .into_iter()
    .map(|(name, price, category, image)| MenuItemCreate::new(name, price, category).with_image(image))
    .collect()
}

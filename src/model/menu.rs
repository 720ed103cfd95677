//! Menu catalog types.
//!
//! [`MenuItem`] implements [`StoreEntity`](crate::framework::StoreEntity) in
//! [`menu_actor::entity`](crate::menu_actor::entity); it is created from [`MenuItemCreate`] and
//! edited by staff through [`MenuItemUpdate`].
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Category names shown to customers, in display order. `"All"` disables category filtering.
pub const CATEGORIES: &[&str] = &["All", "Starters", "Mains", "Noodles", "Desserts", "Drinks"];

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Ingredient and dietary tags, without duplicates, in the order they were given.
    pub tags: Vec<String>,
    pub price: f64,
}

impl MenuItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Payload for adding a dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub price: f64,
}

impl MenuItemCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        tags: &[&str],
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            price,
        }
    }
}

/// Partial edit of a dish; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        if name == "All" {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }
}

/// What the customer is currently looking at: a category tab plus a search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl MenuFilter {
    pub fn new(category: impl Into<CategoryFilter>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    /// Category must match exactly; the search term is a case-insensitive substring of the
    /// name or the description. An empty term matches everything.
    pub fn accepts(&self, item: &MenuItem) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => item.category == *name,
        };
        if !category_ok {
            return false;
        }
        let needle = self.search.to_lowercase();
        item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    }
}

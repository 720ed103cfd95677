//! [`StoreEntity`] implementation for [`MenuItem`].
//!
//! Staff edits arrive as partial [`MenuItemUpdate`]s; every write is validated before it lands.
//! Browsing is a `List` request carrying a [`MenuFilter`].

use super::error::MenuError;
use crate::framework::StoreEntity;
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = MenuFilter;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        let item = Self {
            id,
            name: params.name.trim().to_string(),
            description: params.description,
            category: params.category,
            tags: dedupe_tags(params.tags),
            price: params.price,
        };
        validate(&item)?;
        Ok(item)
    }

    fn matches(&self, query: &MenuFilter) -> bool {
        query.accepts(self)
    }

    /// Applies the given fields, then re-validates the whole dish.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = dedupe_tags(tags);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        validate(self)
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}

fn validate(item: &MenuItem) -> Result<(), MenuError> {
    if item.name.is_empty() {
        return Err(MenuError::Validation("name must not be blank".into()));
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(MenuError::Validation(format!(
            "price must be a non-negative amount, got {}",
            item.price
        )));
    }
    Ok(())
}

/// Trims tags, drops empty ones and keeps the first spelling of case-insensitive duplicates.
fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            out.push(tag.to_string());
        }
    }
    out
}

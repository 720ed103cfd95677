//! # Menu Store
//!
//! Holds the restaurant's catalog. Customers browse it with a [`MenuFilter`](crate::model::MenuFilter);
//! kitchen and admin staff add, edit and remove dishes.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]
//! - [`seed`] - the opening catalog
//! - [`new()`] - factory returning the store and its [`MenuClient`]

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::seed_menu;

use crate::clients::MenuClient;
use crate::framework::StoreActor;
use crate::model::MenuItem;

/// Creates a new menu store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<MenuItem>, MenuClient) {
    let (store, generic_client) = StoreActor::new(buffer_size);
    (store, MenuClient::new(generic_client))
}

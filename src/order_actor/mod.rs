//! # Order Store
//!
//! Records placed orders for the kitchen. An order is created once from a cart snapshot, is
//! never edited, and moves from pending to completed when staff mark it served.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] / [`OrderActionResult`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - factory returning the store and its [`OrderClient`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::StoreActor;
use crate::model::Order;

/// Creates a new order store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Order>, OrderClient) {
    let (store, generic_client) = StoreActor::new(buffer_size);
    (store, OrderClient::new(generic_client))
}

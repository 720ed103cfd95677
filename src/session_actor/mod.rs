//! # Session Store
//!
//! One entity per checked-in customer: who sits at which table, what is in their cart, and
//! where they are in the customization flow. Logging out deletes the session and its cart.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for
//!   [`TableSession`], plus [`SessionUpdate`]
//! - [`actions`] - [`SessionAction`] / [`SessionActionResult`]
//! - [`error`] - [`SessionError`]
//! - [`new()`] - factory returning the store and its [`SessionClient`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::SessionUpdate;
pub use error::*;

use crate::clients::SessionClient;
use crate::framework::StoreActor;
use crate::model::TableSession;

/// Creates a new session store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<TableSession>, SessionClient) {
    let (store, generic_client) = StoreActor::new(buffer_size);
    (store, SessionClient::new(generic_client))
}

//! Generic in-memory store framework.
//!
//! Every resource collection in the restaurant (menu, orders, table sessions) lives in its own
//! [`StoreActor`]: a Tokio task that owns the entities and processes requests one at a time,
//! reached through a cloneable [`StoreClient`].
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that resource types implement to be managed by a store
//! - [`StoreActor`] - The request loop owning the entities
//! - [`StoreClient`] - Typed handle for sending requests
//! - [`StoreHandle`] - Shared behaviour for the domain clients
//! - [`StoreError`] - Plumbing errors, plus boxed entity errors
//!
//! # Testing
//!
//! See [`mock`] for test doubles that answer requests without spawning a store.

pub mod client;
pub mod entity;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod store;

pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use handle::StoreHandle;
pub use message::{Reply, StoreRequest};
pub use store::StoreActor;

//! # StoreEntity Trait
//!
//! The contract every resource (menu item, order, table session) implements to be owned by a
//! [`StoreActor`](crate::framework::StoreActor). It names the identifier, the create/update
//! payloads, the resource-specific commands, the listing query and the error type, and provides
//! the lifecycle hooks the store calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`]
//! - [`StoreEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override them to validate or to refuse the operation entirely
//! (orders, for instance, refuse deletion).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be managed by a [`StoreActor`](crate::framework::StoreActor).
///
/// # Async & Context
/// Hooks are `async` so they can talk to other stores or services. The `Context` associated type
/// is injected into every hook when the store starts running, not when it is constructed.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Identifier; the store mints them sequentially from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific commands beyond CRUD (e.g. completing an order).
    type Action: Send + Sync + Debug;

    /// Result returned by [`StoreEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `List` requests.
    type Query: Send + Sync + Debug;

    /// Runtime dependencies injected into the hooks. Use `()` when there are none.
    type Context: Send + Sync;

    /// Per-store error type, boxed into [`StoreError::Entity`](crate::framework::StoreError::Entity)
    /// when it crosses the channel.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly minted id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is part of the result for `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Returning an error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific command.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

//! # StoreHandle Trait
//!
//! Shared behaviour for the domain clients (`MenuClient`, `OrderClient`, `SessionClient`): each
//! wraps a [`StoreClient`] and maps [`StoreError`] into its own error type, and gets `get` and
//! `list` for free.

use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for domain clients built on top of a [`StoreClient`].
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Maps plumbing and entity failures into [`Self::Error`].
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Entities matching `query`, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }
}

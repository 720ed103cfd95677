//! # Store Requests
//!
//! The messages a [`StoreClient`](crate::framework::StoreClient) sends to its
//! [`StoreActor`](crate::framework::StoreActor): CRUD, a filtered listing, and resource-specific
//! actions. Every request carries a oneshot sender for its reply.

use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel used by every request.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store.
///
/// Generic over `T: StoreEntity`, so a session payload can never reach the order store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Reply<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Reply<Option<T>>,
    },
    /// Entities matching the query, in insertion order.
    List {
        query: T::Query,
        respond_to: Reply<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Reply<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Reply<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Reply<T::ActionResult>,
    },
}

//! # Store Client
//!
//! The typed, cloneable handle used to send [`StoreRequest`]s to a
//! [`StoreActor`](crate::framework::StoreActor).

use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// Cloneable handle onto a store. Holds only the sending half of the request channel.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T> + Send,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, query: T::Query) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { query, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

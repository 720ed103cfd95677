use crate::framework::{StoreClient, StoreError, StoreHandle};
use crate::model::{Order, OrderCreate, OrderFilter, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the order store.
///
/// Conflict checks happen before an order reaches this client; see
/// [`DiningSystem::place_order`](crate::lifecycle::DiningSystem::place_order).
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(table = %order.table_number, lines = order.items.len()))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create_order called");
        info!("Sending create_order to store");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    /// Marks an order served. Returns whether its status changed.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: OrderId) -> Result<bool, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Complete)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Complete(changed) => Ok(changed),
        }
    }

    /// Orders are never edited after placement; the store rejects this.
    pub async fn update_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.inner.update(id, ()).await.map_err(Self::map_error)
    }

    /// Orders are never cancelled; the store rejects this.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    pub async fn pending(&self) -> Result<Vec<Order>, OrderError> {
        self.list(OrderFilter::pending()).await
    }
}

#[async_trait]
impl StoreHandle<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> OrderError {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::Store(e.to_string())),
        }
    }
}

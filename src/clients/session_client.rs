use crate::framework::{StoreClient, StoreError, StoreHandle};
use crate::model::{
    CartFlow, CartItemId, CartView, CheckIn, CustomizationOptions, MenuItem, SessionId,
    TableSession,
};
use crate::session_actor::{SessionAction, SessionActionResult, SessionError, SessionUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the session store: check-in, the cart, and logout.
#[derive(Clone)]
pub struct SessionClient {
    inner: StoreClient<TableSession>,
}

impl SessionClient {
    pub fn new(inner: StoreClient<TableSession>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn check_in(
        &self,
        table_number: &str,
        customer_name: &str,
    ) -> Result<SessionId, SessionError> {
        info!("Checking in");
        self.inner
            .create(CheckIn::new(table_number, customer_name))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn move_table(&self, id: SessionId, table_number: &str) -> Result<TableSession, SessionError> {
        let update = SessionUpdate {
            table_number: Some(table_number.to_string()),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Ends the session. The cart goes with it.
    #[instrument(skip(self))]
    pub async fn log_out(&self, id: SessionId) -> Result<(), SessionError> {
        info!("Logging out");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, item), fields(item = %item.name))]
    pub async fn select_item(&self, id: SessionId, item: MenuItem) -> Result<CartFlow, SessionError> {
        match self.act(id, SessionAction::Select(item)).await? {
            SessionActionResult::Select(flow) => Ok(flow),
            other => Err(unexpected(other)),
        }
    }

    pub async fn dismiss_selection(&self, id: SessionId) -> Result<CartFlow, SessionError> {
        match self.act(id, SessionAction::Dismiss).await? {
            SessionActionResult::Dismiss(flow) => Ok(flow),
            other => Err(unexpected(other)),
        }
    }

    /// Adds the selected dish to the cart. `Ok(None)` when no dish was selected.
    #[instrument(skip(self, customization))]
    pub async fn confirm_customization(
        &self,
        id: SessionId,
        customization: CustomizationOptions,
        quantity: u32,
    ) -> Result<Option<CartItemId>, SessionError> {
        debug!(?customization, "confirm_customization called");
        let action = SessionAction::Confirm {
            customization,
            quantity,
        };
        match self.act(id, action).await? {
            SessionActionResult::Confirm(added) => Ok(added),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: SessionId, cart_id: CartItemId) -> Result<bool, SessionError> {
        match self.act(id, SessionAction::Remove(cart_id)).await? {
            SessionActionResult::Remove(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    pub async fn clear_cart(&self, id: SessionId) -> Result<usize, SessionError> {
        match self.act(id, SessionAction::ClearCart).await? {
            SessionActionResult::ClearCart(discarded) => Ok(discarded),
            other => Err(unexpected(other)),
        }
    }

    pub async fn open_cart(&self, id: SessionId) -> Result<CartFlow, SessionError> {
        match self.act(id, SessionAction::OpenCart).await? {
            SessionActionResult::OpenCart(flow) => Ok(flow),
            other => Err(unexpected(other)),
        }
    }

    pub async fn close_cart(&self, id: SessionId) -> Result<CartFlow, SessionError> {
        match self.act(id, SessionAction::CloseCart).await? {
            SessionActionResult::CloseCart(flow) => Ok(flow),
            other => Err(unexpected(other)),
        }
    }

    pub async fn cart(&self, id: SessionId) -> Result<CartView, SessionError> {
        match self.act(id, SessionAction::Snapshot).await? {
            SessionActionResult::Snapshot(view) => Ok(view),
            other => Err(unexpected(other)),
        }
    }

    /// Snapshots the cart for an order and locks it until [`settle`](Self::settle) or
    /// [`abort_checkout`](Self::abort_checkout). An empty cart comes back unlocked.
    #[instrument(skip(self))]
    pub async fn begin_checkout(&self, id: SessionId) -> Result<CartView, SessionError> {
        match self.act(id, SessionAction::BeginCheckout).await? {
            SessionActionResult::BeginCheckout(view) => Ok(view),
            other => Err(unexpected(other)),
        }
    }

    pub async fn abort_checkout(&self, id: SessionId) -> Result<CartFlow, SessionError> {
        match self.act(id, SessionAction::AbortCheckout).await? {
            SessionActionResult::AbortCheckout(flow) => Ok(flow),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the lines that were just placed, leaving anything added since.
    #[instrument(skip(self, placed), fields(lines = placed.len()))]
    pub async fn settle(&self, id: SessionId, placed: Vec<CartItemId>) -> Result<usize, SessionError> {
        match self.act(id, SessionAction::Settle(placed)).await? {
            SessionActionResult::Settle(settled) => Ok(settled),
            other => Err(unexpected(other)),
        }
    }

    async fn act(
        &self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<SessionActionResult, SessionError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: SessionActionResult) -> SessionError {
    SessionError::Store(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl StoreHandle<TableSession> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &StoreClient<TableSession> {
        &self.inner
    }

    fn map_error(e: StoreError) -> SessionError {
        match e {
            StoreError::NotFound(id) => SessionError::NotFound(id),
            other => other
                .into_entity::<SessionError>()
                .unwrap_or_else(|e| SessionError::Store(e.to_string())),
        }
    }
}

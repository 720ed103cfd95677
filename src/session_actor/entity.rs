//! [`StoreEntity`] implementation for [`TableSession`].
//!
//! The customization flow is a small state machine held in [`CartFlow`]:
//!
//! ```text
//! Browsing --Select--> Customizing --Confirm--> Browsing (+1 cart line)
//!     ^                    |
//!     +------Dismiss-------+
//! Browsing --OpenCart--> CartOpen --CloseCart--> Browsing
//! CartOpen --BeginCheckout--> Placing --Settle--> Browsing
//!                                     --AbortCheckout--> CartOpen
//! ```
//!
//! While `Placing`, the cart is locked: edits and a second checkout are refused with
//! [`SessionError::CheckoutInProgress`]. Deleting the session (logging out) discards the cart with
//! it, in any state.

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use crate::framework::StoreEntity;
use crate::model::{
    CartFlow, CartItemId, CheckIn, CustomerSession, OrderItem, SessionId, TableSession,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Moving to another table or correcting the name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub table_number: Option<String>,
    pub customer_name: Option<String>,
}

#[async_trait]
impl StoreEntity for TableSession {
    type Id = SessionId;
    type Create = CheckIn;
    type Update = SessionUpdate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Query = ();
    type Context = ();
    type Error = SessionError;

    fn from_create_params(id: SessionId, params: CheckIn) -> Result<Self, SessionError> {
        let table_number = checked_table(&params.table_number)?;
        Ok(Self {
            id,
            customer: CustomerSession {
                table_number,
                customer_name: params.customer_name.trim().to_string(),
            },
            cart: Vec::new(),
            flow: CartFlow::Browsing,
            next_cart_id: 1,
        })
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: SessionUpdate, _ctx: &()) -> Result<(), SessionError> {
        if let Some(table) = update.table_number {
            self.customer.table_number = checked_table(&table)?;
        }
        if let Some(name) = update.customer_name {
            self.customer.customer_name = name.trim().to_string();
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), SessionError> {
        info!(
            session = %self.id,
            table = %self.customer.table_number,
            discarded = self.cart.len(),
            "Customer left the table"
        );
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        _ctx: &(),
    ) -> Result<SessionActionResult, SessionError> {
        if self.flow == CartFlow::Placing && locks_cart(&action) {
            return Err(SessionError::CheckoutInProgress(self.id.to_string()));
        }
        match action {
            SessionAction::Select(item) => {
                self.flow = CartFlow::Customizing(item);
                Ok(SessionActionResult::Select(self.flow.clone()))
            }
            SessionAction::Dismiss => {
                if matches!(self.flow, CartFlow::Customizing(_)) {
                    self.flow = CartFlow::Browsing;
                }
                Ok(SessionActionResult::Dismiss(self.flow.clone()))
            }
            SessionAction::Confirm {
                customization,
                quantity,
            } => {
                let CartFlow::Customizing(item) = &self.flow else {
                    debug!(session = %self.id, "Confirm without a selected item, ignored");
                    return Ok(SessionActionResult::Confirm(None));
                };
                if quantity == 0 {
                    return Err(SessionError::InvalidQuantity);
                }
                let cart_id = CartItemId(self.next_cart_id);
                self.next_cart_id += 1;
                self.cart.push(OrderItem {
                    cart_id,
                    menu_item: item.clone(),
                    customization,
                    quantity,
                });
                self.flow = CartFlow::Browsing;
                Ok(SessionActionResult::Confirm(Some(cart_id)))
            }
            SessionAction::Remove(cart_id) => {
                let before = self.cart.len();
                self.cart.retain(|line| line.cart_id != cart_id);
                Ok(SessionActionResult::Remove(self.cart.len() < before))
            }
            SessionAction::ClearCart => {
                let discarded = self.cart.len();
                self.cart.clear();
                Ok(SessionActionResult::ClearCart(discarded))
            }
            SessionAction::OpenCart => {
                self.flow = CartFlow::CartOpen;
                Ok(SessionActionResult::OpenCart(self.flow.clone()))
            }
            SessionAction::CloseCart => {
                if self.flow == CartFlow::CartOpen {
                    self.flow = CartFlow::Browsing;
                }
                Ok(SessionActionResult::CloseCart(self.flow.clone()))
            }
            SessionAction::Snapshot => Ok(SessionActionResult::Snapshot(self.view())),
            SessionAction::BeginCheckout => {
                let view = self.view();
                if !view.is_empty() {
                    self.flow = CartFlow::Placing;
                    info!(session = %self.id, lines = view.items.len(), "Checkout started");
                }
                Ok(SessionActionResult::BeginCheckout(view))
            }
            SessionAction::AbortCheckout => {
                if self.flow == CartFlow::Placing {
                    self.flow = CartFlow::CartOpen;
                }
                Ok(SessionActionResult::AbortCheckout(self.flow.clone()))
            }
            SessionAction::Settle(placed) => {
                let before = self.cart.len();
                self.cart.retain(|line| !placed.contains(&line.cart_id));
                self.flow = CartFlow::Browsing;
                Ok(SessionActionResult::Settle(before - self.cart.len()))
            }
        }
    }
}

/// Actions that would change the cart or start another checkout.
fn locks_cart(action: &SessionAction) -> bool {
    matches!(
        action,
        SessionAction::Select(_)
            | SessionAction::Confirm { .. }
            | SessionAction::Remove(_)
            | SessionAction::ClearCart
            | SessionAction::OpenCart
            | SessionAction::BeginCheckout
    )
}

fn checked_table(table: &str) -> Result<String, SessionError> {
    let table = table.trim();
    if table.is_empty() {
        return Err(SessionError::Validation("table number must not be blank".into()));
    }
    Ok(table.to_string())
}

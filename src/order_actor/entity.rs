//! [`StoreEntity`] implementation for [`Order`].
//!
//! An order's contents are fixed at creation. Updates and deletes are refused; the only state
//! change is [`OrderAction::Complete`], which moves Pending to Completed and never back.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::framework::StoreEntity;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus};
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderFilter;
    type Context = ();
    type Error = OrderError;

    /// Validates the snapshot and records it as a pending order.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.table_number.trim().is_empty() {
            return Err(OrderError::Validation("table number must not be blank".into()));
        }
        if params.items.is_empty() {
            return Err(OrderError::Validation("an order needs at least one item".into()));
        }

        let mut cart_ids = HashSet::with_capacity(params.items.len());
        for item in &params.items {
            if item.quantity == 0 {
                return Err(OrderError::Validation(format!(
                    "{} ({}) has quantity 0",
                    item.menu_item.name, item.cart_id
                )));
            }
            if !cart_ids.insert(item.cart_id) {
                return Err(OrderError::Validation(format!(
                    "{} appears twice",
                    item.cart_id
                )));
            }
        }
        if let Some(analysis) = &params.analysis {
            if let Some(stray) = analysis.keys().find(|k| !cart_ids.contains(k)) {
                return Err(OrderError::Validation(format!(
                    "analysis for {stray}, which is not in the order"
                )));
            }
        }

        Ok(Self {
            id,
            table_number: params.table_number,
            customer_name: params.customer_name.filter(|n| !n.trim().is_empty()),
            items: params.items,
            status: OrderStatus::Pending,
            placed_at: params.placed_at,
            analysis: params.analysis,
        })
    }

    fn matches(&self, query: &OrderFilter) -> bool {
        query.accepts(self)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), OrderError> {
        Err(OrderError::Immutable(format!(
            "{} cannot be edited after placement",
            self.id
        )))
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), OrderError> {
        Err(OrderError::Immutable(format!("{} cannot be cancelled", self.id)))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Complete => {
                let changed = self.status == OrderStatus::Pending;
                self.status = OrderStatus::Completed;
                Ok(OrderActionResult::Complete(changed))
            }
        }
    }
}

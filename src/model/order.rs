//! Placed orders and the lines they are made of.
//!
//! [`Order`] implements [`StoreEntity`](crate::framework::StoreEntity) in
//! [`order_actor::entity`](crate::order_actor::entity). Orders are created from
//! [`OrderCreate`] and afterwards only ever change status.
use crate::model::{AiAnalysisResult, CustomizationOptions, MenuItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Identifier of one cart line, unique within its table session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CartItemId(pub u32);

impl Display for CartItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One dish in a cart or an order, with its customization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub cart_id: CartItemId,
    /// Snapshot of the dish at the time it was added; later menu edits do not reach it.
    pub menu_item: MenuItem,
    pub customization: CustomizationOptions,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.menu_item.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_number: String,
    pub customer_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    /// Conflict-check verdicts keyed by cart line. Absent for orders placed without checks.
    pub analysis: Option<BTreeMap<CartItemId, AiAnalysisResult>>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    pub fn analysis_for(&self, cart_id: CartItemId) -> Option<&AiAnalysisResult> {
        self.analysis.as_ref().and_then(|a| a.get(&cart_id))
    }
}

/// Payload for recording a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub table_number: String,
    pub customer_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub analysis: Option<BTreeMap<CartItemId, AiAnalysisResult>>,
    pub placed_at: DateTime<Utc>,
}

/// Listing filter for the order store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn pending() -> Self {
        Self {
            status: Some(OrderStatus::Pending),
        }
    }

    pub fn completed() -> Self {
        Self {
            status: Some(OrderStatus::Completed),
        }
    }

    pub fn accepts(&self, order: &Order) -> bool {
        self.status.map_or(true, |s| s == order.status)
    }
}

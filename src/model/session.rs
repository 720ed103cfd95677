//! Checked-in customers and their carts.
//!
//! [`TableSession`] implements [`StoreEntity`](crate::framework::StoreEntity) in
//! [`session_actor::entity`](crate::session_actor::entity). Checking in creates one, logging
//! out deletes it together with its cart.
use crate::model::{MenuItem, OrderItem};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for table sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Who is sitting where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSession {
    pub table_number: String,
    pub customer_name: String,
}

/// Payload for checking a customer in at a table.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub table_number: String,
    pub customer_name: String,
}

impl CheckIn {
    pub fn new(table_number: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            table_number: table_number.into(),
            customer_name: customer_name.into(),
        }
    }
}

/// Where the customer is in the ordering flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CartFlow {
    /// Looking at the menu.
    #[default]
    Browsing,
    /// The customization dialog is open for this dish.
    Customizing(MenuItem),
    /// The cart drawer is open.
    CartOpen,
    /// An order is being placed from the cart; the cart is locked until it settles.
    Placing,
}

/// A checked-in customer with their cart.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSession {
    pub id: SessionId,
    pub customer: CustomerSession,
    pub cart: Vec<OrderItem>,
    pub flow: CartFlow,
    /// Next cart line number; never reused within the session.
    pub next_cart_id: u32,
}

impl TableSession {
    pub fn view(&self) -> CartView {
        CartView {
            session_id: self.id,
            customer: self.customer.clone(),
            items: self.cart.clone(),
            total_quantity: self.cart.iter().map(|i| i.quantity).sum(),
            subtotal: self.cart.iter().map(OrderItem::line_total).sum(),
        }
    }
}

/// Snapshot of a cart, as rendered in the cart drawer and used for checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub session_id: SessionId,
    pub customer: CustomerSession,
    pub items: Vec<OrderItem>,
    pub total_quantity: u32,
    pub subtotal: f64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Custom actions for the order store.
//!
//! Status changes are the only mutation a placed order accepts; they go through
//! [`StoreEntity::handle_action`](crate::framework::StoreEntity::handle_action).

/// Commands on a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Marks the order as served. Completing a completed order changes nothing.
    Complete,
}

/// Results from [`OrderAction`]s; variants match 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderActionResult {
    /// Whether the status actually changed.
    Complete(bool),
}

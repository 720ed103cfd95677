//! Error types for the order store.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order does not exist.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order payload is invalid (no items, zero quantity, stray analysis).
    #[error("Order validation error: {0}")]
    Validation(String),

    /// Placed orders cannot be edited or cancelled.
    #[error("Order is immutable: {0}")]
    Immutable(String),

    /// The order store could not be reached.
    #[error("Order store error: {0}")]
    Store(String),
}

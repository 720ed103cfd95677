//! Error types for the session store.

use thiserror::Error;

/// Errors that can occur while a customer is checked in.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No such session (never checked in, or already logged out).
    #[error("Session not found: {0}")]
    NotFound(String),

    /// Check-in or edit data is invalid.
    #[error("Session validation error: {0}")]
    Validation(String),

    /// A cart line needs a quantity of at least one.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    /// An order from this cart is still being placed.
    #[error("Checkout already in progress for {0}")]
    CheckoutInProgress(String),

    /// The session store could not be reached.
    #[error("Session store error: {0}")]
    Store(String),
}

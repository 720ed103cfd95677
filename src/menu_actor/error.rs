//! Error types for the menu store.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested dish does not exist.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The dish data is invalid (blank name, negative price, ...).
    #[error("Menu validation error: {0}")]
    Validation(String),

    /// The menu store could not be reached.
    #[error("Menu store error: {0}")]
    Store(String),
}

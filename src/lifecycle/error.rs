//! Errors for operations that span several stores.

use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use crate::session_actor::SessionError;
use thiserror::Error;

/// Why an order could not be placed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Why the demo order history could not be generated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeedError {
    #[error("Menu is empty, nothing to order")]
    EmptyMenu,

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

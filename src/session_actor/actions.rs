//! Cart and customization-flow commands for a table session.

use crate::model::{CartFlow, CartItemId, CartView, CustomizationOptions, MenuItem};

/// Commands on a checked-in session.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Open the customization dialog for a dish.
    Select(MenuItem),
    /// Close the customization dialog without adding anything.
    Dismiss,
    /// Add the selected dish with these options. Ignored when nothing is selected.
    Confirm {
        customization: CustomizationOptions,
        quantity: u32,
    },
    /// Drop one cart line.
    Remove(CartItemId),
    /// Empty the cart.
    ClearCart,
    OpenCart,
    CloseCart,
    /// Read the cart without changing it.
    Snapshot,
    /// Snapshot the cart for an order and lock it. Refused while another checkout is running.
    BeginCheckout,
    /// Unlock the cart after a checkout that recorded nothing.
    AbortCheckout,
    /// Remove the lines that were just placed as an order, and unlock the cart.
    Settle(Vec<CartItemId>),
}

/// Results from [`SessionAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionActionResult {
    Select(CartFlow),
    Dismiss(CartFlow),
    /// The new line's id, or `None` when the confirm was ignored.
    Confirm(Option<CartItemId>),
    /// Whether a line was removed.
    Remove(bool),
    /// Number of lines discarded.
    ClearCart(usize),
    OpenCart(CartFlow),
    CloseCart(CartFlow),
    Snapshot(CartView),
    /// The cart being placed. Empty carts are returned without locking.
    BeginCheckout(CartView),
    AbortCheckout(CartFlow),
    /// Number of lines settled.
    Settle(usize),
}

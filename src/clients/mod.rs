//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).
//!
//! Each client speaks its store's domain: entity errors come back as the store's own error type,
//! and actions get named methods instead of raw [`perform_action`](crate::framework::StoreClient::perform_action)
//! calls. `get` and `list` come from [`StoreHandle`](crate::framework::StoreHandle).

pub mod menu_client;
pub mod order_client;
pub mod session_client;

pub use menu_client::*;
pub use order_client::*;
pub use session_client::*;

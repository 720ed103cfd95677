//! # Lifecycle
//!
//! Wiring and orchestration: [`DiningSystem`] owns the store tasks and implements the flows
//! that touch more than one store (checkout, kitchen queue, sales figures).
//! [`setup_tracing`](tracing::setup_tracing) configures logging for the binary.

pub mod dining_system;
pub mod error;
pub mod tracing;

pub use dining_system::*;
pub use error::*;

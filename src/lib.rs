//! # DineRight
//!
//! > **Table-side ordering with an AI conflict check.**
//!
//! Customers browse the menu, customize dishes and place orders from their table; the kitchen
//! works through pending orders; admins edit the menu and watch sales. Before an order is
//! recorded, every dish is checked by a generative model for clashes between the dish and the
//! customer's allergy or dietary notes, and gets a kitchen-ticket summary.
//!
//! ## Core Concepts
//!
//! ### One store per resource
//! Menu items, placed orders and table sessions each live in their own
//! [`StoreActor`](framework::StoreActor), a Tokio task that owns its collection and handles
//! requests one at a time. Nothing is shared and nothing is locked. State is in memory and is
//! gone on restart.
//!
//! ### Advisory conflict checks
//! The check never blocks an order. When the model cannot be reached or answers with anything
//! that does not match the response schema, the dish is marked safe and the customer's notes
//! go to the kitchen verbatim. See [`conflict_check`].
//!
//! ### Mocking
//! [`framework::mock::MockStore`] scripts a store for client tests, and
//! [`conflict_check::mock::ScriptedModel`] scripts the model.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store, its client and the [`StoreEntity`](framework::StoreEntity) trait each
//! resource implements.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`DiningSystem`](lifecycle::DiningSystem) spins up the stores and runs checkout, the
//! kitchen queue and the sales summary.
//!
//! ### 3. The Interface ([`clients`])
//! [`MenuClient`](clients::MenuClient), [`OrderClient`](clients::OrderClient) and
//! [`SessionClient`](clients::SessionClient) hide the message passing.
//!
//! ### 4. The Resources ([`menu_actor`], [`order_actor`], [`session_actor`])
//! Entity rules: menu validation, immutable orders, the cart flow.
//!
//! ### 5. The Check ([`conflict_check`]) and settings ([`config`])
//!
//! ## Running the Demo
//!
//! ```bash
//! # Offline: every check falls back
//! RUST_LOG=info cargo run
//!
//! # Against Gemini
//! API_KEY=... RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod conflict_check;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod session_actor;

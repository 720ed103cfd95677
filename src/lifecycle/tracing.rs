//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! Module paths are hidden (`with_target(false)`); stores tag their lines with `entity_type`
//! instead.
//!
//! ```bash
//! # Store lifecycle, mutations and checkout steps
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Stores**: start, shutdown and final size; each request at `debug`, mutations at `info`,
//!   rejected requests at `warn`
//! - **Clients**: `#[instrument]` spans around each call
//! - **Checkout**: conflict checks per line, and a `warn` whenever a check falls back
//!
//! With `RUST_LOG=info` a checkout reads:
//!
//! ```text
//! INFO place_order{session=SessionId(1)}: Checking cart for conflicts lines=2
//! WARN place_order{session=SessionId(1)}:analyze{item=Pad Thai}: Conflict check failed, using fallback item=Pad Thai error=API credential API_KEY is not set
//! INFO place_order{session=SessionId(1)}:create_order{table=12 lines=2}: Sending create_order to store
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Action ok entity_type="TableSession" id=session_1
//! INFO place_order{session=SessionId(1)}: Order placed order=order_1
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

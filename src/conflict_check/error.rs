//! Error types for the conflict check. None of these escape
//! [`ConflictChecker::analyze`](super::ConflictChecker::analyze); they end up in the log.

use thiserror::Error;

/// Failures talking to the generative model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The credential variable is unset or empty at call time.
    #[error("API credential {0} is not set")]
    MissingCredential(String),

    #[error("Model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The reply parsed, but carried no candidate text.
    #[error("Malformed model response: {0}")]
    Envelope(String),

    /// Scripted failures in tests and the offline demo.
    #[error("Model unavailable: {0}")]
    Unavailable(String),
}

/// Why a conflict check fell back to the default verdict.
#[derive(Debug, Error)]
pub enum ConflictCheckError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Response does not match schema: {0}")]
    Schema(#[from] serde_json::Error),
}

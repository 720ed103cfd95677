//! # Scripted Model
//!
//! A [`GenerativeModel`] that answers from a queue instead of the network. Each call pops the next
//! reply; once the queue is empty every call fails with [`ModelError::Unavailable`], which is what
//! the offline demo relies on to exercise the fallback path. Prompts are recorded for assertions.
//! [`with_delay`](ScriptedModel::with_delay) makes every call take a while, to keep a checkout
//! in flight.
//!
//! ```rust
//! use dine_right::conflict_check::mock::ScriptedModel;
//!
//! let model = ScriptedModel::new()
//!     .reply(r#"{"safe":false,"message":"Contains peanuts","kitchenTicketSummary":"ALLERGY: PEANUT"}"#)
//!     .fail("quota exceeded");
//! assert_eq!(model.remaining(), 2);
//! ```

use super::error::ModelError;
use super::GenerativeModel;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    prompts: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each call sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queues a successful reply carrying `text`.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    /// Queues a failed call.
    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.push(Err(ModelError::Unavailable(reason.into())))
    }

    /// Queues a verdict, serialized the way the model would send it.
    pub fn verdict(self, safe: bool, message: &str, ticket: &str) -> Self {
        let text = serde_json::json!({
            "safe": safe,
            "message": message,
            "kitchenTicketSummary": ticket,
        })
        .to_string();
        self.reply(text)
    }

    fn push(self, reply: Result<String, ModelError>) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_json(&self, prompt: &str, _schema: &Value) -> Result<String, ModelError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| Err(ModelError::Unavailable("no scripted reply".into())))
    }
}

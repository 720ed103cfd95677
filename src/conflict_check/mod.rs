//! # Conflict Check
//!
//! Asks a generative model whether a customer's customization clashes with the dish they
//! ordered (peanut allergy on a peanut noodle dish, vegan on a meat curry) and for a short
//! kitchen ticket.
//!
//! The check is advisory. [`ConflictChecker::analyze`] never fails: a missing credential, a
//! network error, a bad status, an empty reply or a reply that does not match
//! [`response_schema`] all produce [`fallback_analysis`], which marks the dish safe and copies
//! the customer's notes onto the ticket verbatim. There are no retries.
//!
//! ## Structure
//!
//! - [`prompt`] - [`build_prompt`]
//! - [`schema`] - [`response_schema`] and [`parse_analysis`]
//! - [`gemini`] - [`GeminiModel`], the HTTP implementation of [`GenerativeModel`]
//! - [`mock`] - [`ScriptedModel`](mock::ScriptedModel) for tests and offline runs
//! - [`error`] - [`ModelError`] and [`ConflictCheckError`]

pub mod error;
pub mod gemini;
pub mod mock;
pub mod prompt;
pub mod schema;

pub use error::*;
pub use gemini::GeminiModel;
pub use prompt::build_prompt;
pub use schema::{parse_analysis, response_schema};

use crate::model::{AiAnalysisResult, CartItemId, CustomizationOptions, MenuItem, OrderItem};
use async_trait::async_trait;
use futures::future::join_all;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// The seam between the checker and whatever produces JSON text from a prompt.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the model's reply text, expected to be JSON matching `schema`.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, ModelError>;
}

pub const FALLBACK_MESSAGE: &str = "Could not verify with AI, but your notes have been saved.";

/// The verdict used whenever the model cannot be consulted.
pub fn fallback_analysis(customization: &CustomizationOptions) -> AiAnalysisResult {
    AiAnalysisResult {
        safe: true,
        message: FALLBACK_MESSAGE.to_string(),
        kitchen_ticket_summary: format!(
            "NOTES: {} {}",
            customization.allergy_notes, customization.special_requests
        ),
    }
}

#[derive(Clone)]
pub struct ConflictChecker {
    model: Arc<dyn GenerativeModel>,
}

impl ConflictChecker {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Checks one dish. Falls back instead of failing.
    #[instrument(skip_all, fields(item = %item.name))]
    pub async fn analyze(
        &self,
        item: &MenuItem,
        customization: &CustomizationOptions,
    ) -> AiAnalysisResult {
        match self.try_analyze(item, customization).await {
            Ok(verdict) => {
                debug!(safe = verdict.safe, "Conflict check answered");
                verdict
            }
            Err(e) => {
                warn!(item = %item.name, error = %e, "Conflict check failed, using fallback");
                fallback_analysis(customization)
            }
        }
    }

    /// Checks one dish and reports why it could not be checked.
    pub async fn try_analyze(
        &self,
        item: &MenuItem,
        customization: &CustomizationOptions,
    ) -> Result<AiAnalysisResult, ConflictCheckError> {
        let prompt = build_prompt(item, customization);
        let text = self.model.generate_json(&prompt, &response_schema()).await?;
        parse_analysis(&text)
    }

    /// Checks every line concurrently and resolves once all of them have.
    pub async fn analyze_cart(&self, items: &[OrderItem]) -> BTreeMap<CartItemId, AiAnalysisResult> {
        let checks = items.iter().map(|line| async move {
            let verdict = self.analyze(&line.menu_item, &line.customization).await;
            (line.cart_id, verdict)
        });
        join_all(checks).await.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::mock::ScriptedModel;
    use super::*;
    use crate::model::MenuItemId;
    use pretty_assertions::assert_eq;

    fn pad_thai() -> MenuItem {
        MenuItem {
            id: MenuItemId(5),
            name: "Pad Thai".into(),
            description: "Rice noodles with tamarind and crushed peanuts".into(),
            category: "Noodles".into(),
            tags: vec!["peanuts".into(), "noodles".into()],
            price: 14.0,
        }
    }

    fn peanut_allergy() -> CustomizationOptions {
        CustomizationOptions::default().with_allergy("peanut allergy")
    }

    #[tokio::test]
    async fn well_formed_reply_is_returned_as_is() {
        let model = Arc::new(ScriptedModel::new().verdict(
            false,
            "Pad Thai is topped with peanuts.",
            "ALLERGY: PEANUT - DO NOT SERVE",
        ));
        let checker = ConflictChecker::new(model.clone());

        let verdict = checker.analyze(&pad_thai(), &peanut_allergy()).await;
        assert!(!verdict.safe);
        assert_eq!(verdict.kitchen_ticket_summary, "ALLERGY: PEANUT - DO NOT SERVE");
        assert!(model.prompts()[0].contains("\"peanut allergy\""));
    }

    #[tokio::test]
    async fn any_failure_falls_back_to_safe_with_notes() {
        let customization = peanut_allergy().with_request("no cilantro");
        let expected = AiAnalysisResult {
            safe: true,
            message: FALLBACK_MESSAGE.into(),
            kitchen_ticket_summary: "NOTES: peanut allergy no cilantro".into(),
        };

        let model = ScriptedModel::new()
            .fail("timeout")
            .reply("")
            .reply(r#"{"safe": true}"#)
            .reply("<html>");
        let checker = ConflictChecker::new(Arc::new(model));
        for _ in 0..4 {
            assert_eq!(checker.analyze(&pad_thai(), &customization).await, expected);
        }
    }

    #[tokio::test]
    async fn try_analyze_reports_the_cause() {
        let checker = ConflictChecker::new(Arc::new(ScriptedModel::new().reply("   ")));
        let err = checker
            .try_analyze(&pad_thai(), &peanut_allergy())
            .await
            .unwrap_err();
        assert!(matches!(err, ConflictCheckError::EmptyResponse));
    }

    #[tokio::test]
    async fn cart_results_are_keyed_by_line() {
        let line = |n: u32| OrderItem {
            cart_id: CartItemId(n),
            menu_item: pad_thai(),
            customization: CustomizationOptions::default(),
            quantity: 1,
        };
        let model = ScriptedModel::new()
            .verdict(true, "Enjoy", "STD")
            .verdict(true, "Enjoy", "STD");
        let checker = ConflictChecker::new(Arc::new(model));

        let results = checker.analyze_cart(&[line(1), line(4), line(9)]).await;
        assert_eq!(
            results.keys().copied().collect::<Vec<_>>(),
            vec![CartItemId(1), CartItemId(4), CartItemId(9)]
        );
        // Two scripted replies, the third line falls back.
        let fallbacks = results
            .values()
            .filter(|v| v.message == FALLBACK_MESSAGE)
            .count();
        assert_eq!(fallbacks, 1);
    }
}

//! HTTP client for the Gemini `generateContent` endpoint.

use super::error::ModelError;
use super::GenerativeModel;
use crate::config::AppConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Calls a hosted Gemini model.
///
/// Holds only settings. The credential is read from the environment and the HTTP client is
/// built on every call, so a missing key fails that call alone.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    endpoint: String,
    model: String,
    api_key_var: String,
    timeout: Duration,
}

impl GeminiModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.gemini_endpoint.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key_var: config.api_key_var.clone(),
            timeout: config.ai_timeout,
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Whether a usable credential is set right now. Blank values count as unset.
    pub fn has_credential(&self) -> bool {
        self.api_key().is_ok()
    }

    fn api_key(&self) -> Result<String, ModelError> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ModelError::MissingCredential(self.api_key_var.clone()))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

fn request_body<'a>(prompt: &'a str, schema: &'a Value) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: [Content {
            parts: [Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema,
        },
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`
    fn into_text(self) -> Result<String, ModelError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| ModelError::Envelope("no candidate text".into()))
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    #[instrument(skip_all)]
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, ModelError> {
        let api_key = self.api_key()?;
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        debug!(model = %self.model, url = %self.url(), "Sending generateContent");
        let response = client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request_body(prompt, schema))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<GenerateResponse>().await?.into_text()
    }
}

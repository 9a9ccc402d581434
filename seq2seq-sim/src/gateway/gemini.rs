//! Gemini-backed translation provider
//!
//! Calls the Generative Language API's `generateContent` endpoint with a
//! translate-only prompt and extracts the first candidate's text. The prompt
//! asks for the translated text and nothing else, so the whole response body
//! is treated as the translation.

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::TranslationGateway;
use crate::language::Language;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

const DEFAULT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Translation provider backed by the Gemini `generateContent` API.
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider with the given request timeout.
    pub fn new(timeout: Duration) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(GeminiProvider {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different endpoint, for test servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_prompt(text: &str, from: Language, to: Language) -> String {
        format!(
            "Translate the following text from {} to {}. \
             Return ONLY the translated text and nothing else: \"{}\"",
            from.name(),
            to.name(),
            text
        )
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TranslationGateway for GeminiProvider {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
        credential: &str,
    ) -> GatewayResult<String> {
        if credential.trim().is_empty() {
            return Err(GatewayError::MissingCredential);
        }

        let url = format!("{}?key={}", self.base_url, credential);
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::build_prompt(text, from, to) }] }]
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            // The API reports failures as { "error": { "message": ... } };
            // surface that message verbatim when present.
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("API call failed with status {}", status));
            return Err(GatewayError::Service(message));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|_| GatewayError::MalformedResponse)?;

        let translated = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(GatewayError::MalformedResponse)?
            .trim()
            .to_string();

        if translated.is_empty() {
            return Err(GatewayError::EmptyResult);
        }

        Ok(translated)
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}

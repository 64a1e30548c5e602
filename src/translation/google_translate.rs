//! Google Translate API v2 provider.
//!
//! Sends a single text per request with `format=text` so the API returns
//! plain text instead of HTML-escaped output.

use super::{MachineTranslator, TranslationError, TranslationResult};
use crate::config::DEFAULT_TRANSLATE_API_URL;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Google Translate API v2 provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Create a provider for the public Google endpoint.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> TranslationResult<Self> {
        Self::with_base_url(api_key, DEFAULT_TRANSLATE_API_URL, timeout)
    }

    /// Create a provider against a custom endpoint (proxies, tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> TranslationResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TranslationError::Config("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        let body = json!({
            "q": text,
            "source": source_lang,
            "target": target_lang,
            "format": "text"
        });

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Api { status, body });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                TranslationError::InvalidResponse("response contained no translations".to_string())
            })
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

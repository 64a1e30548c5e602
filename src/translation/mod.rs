//! Translation into English.
//!
//! [`MachineTranslator`] abstracts over translation backends so the service
//! is not coupled to any provider. [`Translator`] wraps an optional provider
//! and applies the policy used by the analyzer: English text is passed
//! through untouched and provider failures degrade to "no translation".

mod google_translate;
mod mock;

pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};

use crate::config::Config;
use crate::language::LanguageRegistry;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors raised by translation providers.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation provider misconfigured: {0}")]
    Config(String),

    #[error("Translation request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),

    #[error("Translation error: {0}")]
    Provider(String),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Generic trait for machine translation providers.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang` (short language codes).
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String>;

    /// Name of this provider, used in logs.
    fn provider_name(&self) -> &str;
}

/// Best-effort translation into the canonical language.
#[derive(Clone, Default)]
pub struct Translator {
    provider: Option<Arc<dyn MachineTranslator>>,
}

impl Translator {
    pub fn new(provider: Arc<dyn MachineTranslator>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Translator without a provider. Only English text gets a "translation".
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    /// Build the translator described by the configuration.
    ///
    /// Without a Google Translate API key translation is disabled.
    pub fn from_config(config: &Config) -> TranslationResult<Self> {
        match &config.google_translate_api_key {
            Some(api_key) => {
                let provider = GoogleTranslateProvider::with_base_url(
                    api_key.as_str(),
                    config.translate_api_url.as_str(),
                    Duration::from_secs(config.translate_timeout_secs),
                )?;
                info!("Translation enabled via {}", provider.provider_name());
                Ok(Self::new(Arc::new(provider)))
            }
            None => {
                warn!("GOOGLE_TRANSLATE_API_KEY not set, translation disabled");
                Ok(Self::disabled())
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Translate `text` written in `source_code` into English.
    ///
    /// Returns the input unchanged for English, `None` when no provider is
    /// configured or the provider fails. Failures are logged, never returned.
    pub async fn translate(&self, text: &str, source_code: &str) -> Option<String> {
        let target = LanguageRegistry::get().canonical().code;

        if source_code == target {
            return Some(text.to_string());
        }

        let Some(provider) = &self.provider else {
            debug!("No translation provider configured, skipping {} -> {}", source_code, target);
            return None;
        };

        match provider.translate(text, source_code, target).await {
            Ok(translated) => {
                debug!(
                    "Translated {} -> {} with {}",
                    source_code,
                    target,
                    provider.provider_name()
                );
                Some(translated)
            }
            Err(e) => {
                error!(
                    "Translation {} -> {} with {} failed: {}",
                    source_code,
                    target,
                    provider.provider_name(),
                    e
                );
                None
            }
        }
    }
}

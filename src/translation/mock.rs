//! Mock machine translator
//!
//! Deterministic, network-free provider for tests and offline runs.

use super::{MachineTranslator, TranslationError, TranslationResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "hola" → "hola_en"
    Suffix,

    /// Predefined mappings: (text, target) → translation, suffix otherwise
    Mappings(HashMap<(String, String), String>),

    /// Simulate provider errors
    Error(String),

    /// Return input unchanged
    NoOp,
}

#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target_lang)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target_lang.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target_lang)))
            }
            MockMode::Error(msg) => Err(TranslationError::Provider(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

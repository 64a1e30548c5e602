//! Detection + translation orchestration.

use crate::detection::Detector;
use crate::language::LanguageRegistry;
use crate::translation::Translator;
use serde::Serialize;
use tracing::debug;

/// Outcome of analyzing one piece of text.
///
/// Either a failure carrying only `error`, or a detection carrying the
/// language code and name plus a best-effort translation. The two
/// constructors are the only way to build one; it is serialized for
/// responses but never deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    language_code: Option<String>,
    language_name: Option<String>,
    success: bool,
    error: Option<String>,
    translated_text: Option<String>,
}

impl DetectionResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            language_code: None,
            language_name: None,
            success: false,
            error: Some(error.into()),
            translated_text: None,
        }
    }

    pub fn detected(
        language_code: impl Into<String>,
        language_name: impl Into<String>,
        translated_text: Option<String>,
    ) -> Self {
        Self {
            language_code: Some(language_code.into()),
            language_name: Some(language_name.into()),
            success: true,
            error: None,
            translated_text,
        }
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn language_name(&self) -> Option<&str> {
        self.language_name.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn translated_text(&self) -> Option<&str> {
        self.translated_text.as_deref()
    }
}

/// Runs detection and then translation for each request.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Clone)]
pub struct LanguageAnalyzer {
    detector: Detector,
    translator: Translator,
}

impl LanguageAnalyzer {
    pub fn new(detector: Detector, translator: Translator) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Detect the language of `text` and translate it into English.
    ///
    /// Detection failures end the request with `success = false`.
    /// Translation failures only leave `translated_text` empty.
    pub async fn analyze(&self, text: &str) -> DetectionResult {
        let code = match self.detector.detect(text) {
            Ok(code) => code,
            Err(e) => return DetectionResult::failed(e.to_string()),
        };

        let name = LanguageRegistry::get().name_for(&code);
        debug!("Detected language: {} ({})", code, name);

        let translated_text = self.translator.translate(text, &code).await;

        DetectionResult::detected(code, name, translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{IdentifyError, LanguageIdentifier};
    use crate::translation::{MockMode, MockTranslator};
    use std::collections::HashMap;
    use std::sync::Arc;

    struct FixedIdentifier(Result<&'static str, IdentifyError>);

    impl LanguageIdentifier for FixedIdentifier {
        fn identify(&self, _text: &str) -> Result<String, IdentifyError> {
            self.0.clone().map(str::to_string)
        }

        fn identifier_name(&self) -> &str {
            "fixed"
        }
    }

    fn analyzer(identified: Result<&'static str, IdentifyError>, mode: MockMode) -> LanguageAnalyzer {
        LanguageAnalyzer::new(
            Detector::new(Arc::new(FixedIdentifier(identified))),
            Translator::new(Arc::new(MockTranslator::new(mode))),
        )
    }

    // ==================== DetectionResult Tests ====================

    #[test]
    fn test_failed_result_shape() {
        let result = DetectionResult::failed("nope");
        assert!(!result.success());
        assert_eq!(result.error(), Some("nope"));
        assert!(result.language_code().is_none());
        assert!(result.language_name().is_none());
        assert!(result.translated_text().is_none());
    }

    #[test]
    fn test_detected_result_shape() {
        let result = DetectionResult::detected("fr", "French", None);
        assert!(result.success());
        assert!(result.error().is_none());
        assert_eq!(result.language_code(), Some("fr"));
        assert_eq!(result.language_name(), Some("French"));
    }

    #[test]
    fn test_serialization_keeps_null_fields() {
        let json = serde_json::to_value(DetectionResult::failed("Please provide some text to analyze"))
            .expect("Should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "language_code": null,
                "language_name": null,
                "success": false,
                "error": "Please provide some text to analyze",
                "translated_text": null
            })
        );
    }

    // ==================== analyze Tests ====================

    #[tokio::test]
    async fn test_analyze_empty_text() {
        let result = analyzer(Ok("en"), MockMode::NoOp).analyze("   ").await;
        assert_eq!(result, DetectionResult::failed("Please provide some text to analyze"));
    }

    #[tokio::test]
    async fn test_analyze_short_text() {
        let result = analyzer(Ok("en"), MockMode::NoOp).analyze("hey").await;
        assert_eq!(
            result,
            DetectionResult::failed("Text is too short for reliable language detection")
        );
    }

    #[tokio::test]
    async fn test_analyze_english_returns_input_as_translation() {
        let text = "The quick brown fox jumps over the lazy dog";
        let result = analyzer(Ok("en"), MockMode::Suffix).analyze(text).await;

        assert!(result.success());
        assert_eq!(result.language_code(), Some("en"));
        assert_eq!(result.language_name(), Some("English"));
        assert_eq!(result.translated_text(), Some(text));
    }

    #[tokio::test]
    async fn test_analyze_french_is_translated() {
        let text = "Bonjour, comment allez-vous aujourd'hui?";
        let mut map = HashMap::new();
        map.insert(
            (text.to_string(), "en".to_string()),
            "Hello, how are you today?".to_string(),
        );

        let result = analyzer(Ok("fr"), MockMode::Mappings(map)).analyze(text).await;

        assert!(result.success());
        assert_eq!(result.language_code(), Some("fr"));
        assert_eq!(result.language_name(), Some("French"));
        assert_eq!(result.translated_text(), Some("Hello, how are you today?"));
    }

    #[tokio::test]
    async fn test_analyze_translation_failure_keeps_success() {
        let result = analyzer(Ok("fr"), MockMode::Error("offline".to_string()))
            .analyze("Bonjour, comment allez-vous aujourd'hui?")
            .await;

        assert!(result.success());
        assert!(result.error().is_none());
        assert_eq!(result.language_name(), Some("French"));
        assert!(result.translated_text().is_none());
    }

    #[tokio::test]
    async fn test_analyze_unknown_code_maps_to_unknown_language() {
        let result = analyzer(Ok("xx"), MockMode::NoOp).analyze("Some valid text").await;

        assert!(result.success());
        assert_eq!(result.language_code(), Some("xx"));
        assert_eq!(result.language_name(), Some("Unknown language"));
    }

    #[tokio::test]
    async fn test_analyze_detection_failure() {
        let result = analyzer(
            Err(IdentifyError::NoFeatures("No features in text.".to_string())),
            MockMode::NoOp,
        )
        .analyze("12345 67890")
        .await;

        assert_eq!(
            result,
            DetectionResult::failed("Language detection error: No features in text.")
        );
    }

    #[tokio::test]
    async fn test_analyze_unexpected_failure() {
        let result = analyzer(Err(IdentifyError::Other("boom".to_string())), MockMode::NoOp)
            .analyze("Some valid text")
            .await;

        assert_eq!(result.error(), Some("An unexpected error occurred: boom"));
        assert!(!result.success());
    }

    #[tokio::test]
    async fn test_analyze_is_idempotent_for_detection() {
        let analyzer = analyzer(Ok("de"), MockMode::Suffix);
        let first = analyzer.analyze("Guten Morgen, wie geht es?").await;
        let second = analyzer.analyze("Guten Morgen, wie geht es?").await;

        assert_eq!(first.language_code(), second.language_code());
        assert_eq!(first.language_name(), second.language_name());
    }

    #[tokio::test]
    async fn test_analyze_with_disabled_translator() {
        let analyzer = LanguageAnalyzer::new(
            Detector::new(Arc::new(FixedIdentifier(Ok("es")))),
            Translator::disabled(),
        );
        let result = analyzer.analyze("Hola, ¿cómo estás?").await;

        assert!(result.success());
        assert_eq!(result.language_name(), Some("Spanish"));
        assert!(result.translated_text().is_none());
    }
}

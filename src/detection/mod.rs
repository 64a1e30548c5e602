//! Language detection.
//!
//! [`Detector`] validates raw input and delegates the actual identification to
//! a [`LanguageIdentifier`]. The identifier is injectable so tests can supply a
//! deterministic stand-in; production uses [`WhatlangIdentifier`].

mod whatlang_identifier;

pub use whatlang_identifier::WhatlangIdentifier;

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Minimum number of characters (after trimming) for a detection attempt.
pub const MIN_TEXT_CHARS: usize = 5;

/// Number of characters of the input shown in log previews.
const PREVIEW_CHARS: usize = 50;

pub const EMPTY_TEXT_MESSAGE: &str = "Please provide some text to analyze";
pub const SHORT_TEXT_MESSAGE: &str = "Text is too short for reliable language detection";

/// Failure reported by an external language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifyError {
    /// The text carried nothing the identifier could classify.
    #[error("{0}")]
    NoFeatures(String),

    /// Anything else that went wrong inside the identifier.
    #[error("{0}")]
    Other(String),
}

/// Capability that turns text into a short language code.
pub trait LanguageIdentifier: Send + Sync {
    fn identify(&self, text: &str) -> Result<String, IdentifyError>;

    /// Name used in logs.
    fn identifier_name(&self) -> &str;
}

/// Reasons a detection request can fail.
///
/// The `Display` output is what callers see in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Language detection error: {0}")]
    DetectionFailed(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Validates text and runs it through a [`LanguageIdentifier`].
#[derive(Clone)]
pub struct Detector {
    identifier: Arc<dyn LanguageIdentifier>,
}

impl Detector {
    pub fn new(identifier: Arc<dyn LanguageIdentifier>) -> Self {
        Self { identifier }
    }

    /// Detector backed by the bundled whatlang identifier.
    pub fn whatlang() -> Self {
        Self::new(Arc::new(WhatlangIdentifier::new()))
    }

    /// Detect the language of `text`, returning its short code.
    ///
    /// Input validation runs before the identifier is consulted. There are no
    /// retries: one identification attempt per call.
    pub fn detect(&self, text: &str) -> Result<String, DetectionError> {
        validate(text)?;

        debug!(
            "Detecting language with {} for: {}",
            self.identifier.identifier_name(),
            preview(text)
        );

        match self.identifier.identify(text) {
            Ok(code) => {
                debug!("Detected language code: {}", code);
                Ok(code)
            }
            Err(IdentifyError::NoFeatures(msg)) => {
                error!("Language detection error: {}", msg);
                Err(DetectionError::DetectionFailed(msg))
            }
            Err(IdentifyError::Other(msg)) => {
                error!("Unexpected error: {}", msg);
                Err(DetectionError::Unexpected(msg))
            }
        }
    }
}

/// Reject empty and too-short input.
pub fn validate(text: &str) -> Result<(), DetectionError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(DetectionError::InvalidInput(EMPTY_TEXT_MESSAGE.to_string()));
    }

    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(DetectionError::InvalidInput(SHORT_TEXT_MESSAGE.to_string()));
    }

    Ok(())
}

/// Truncated, log-friendly view of user input.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FixedIdentifier(Result<String, IdentifyError>);

    impl LanguageIdentifier for FixedIdentifier {
        fn identify(&self, _text: &str) -> Result<String, IdentifyError> {
            self.0.clone()
        }

        fn identifier_name(&self) -> &str {
            "fixed"
        }
    }

    fn detector_returning(result: Result<String, IdentifyError>) -> Detector {
        Detector::new(Arc::new(FixedIdentifier(result)))
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_empty_text_is_rejected() {
        let detector = detector_returning(Ok("en".to_string()));
        let err = detector.detect("").unwrap_err();
        assert_eq!(err, DetectionError::InvalidInput(EMPTY_TEXT_MESSAGE.to_string()));
        assert_eq!(err.to_string(), "Please provide some text to analyze");
    }

    #[test]
    fn test_whitespace_only_text_is_rejected() {
        let detector = detector_returning(Ok("en".to_string()));
        let err = detector.detect(" \t\n  ").unwrap_err();
        assert_eq!(err.to_string(), EMPTY_TEXT_MESSAGE);
    }

    #[test]
    fn test_short_text_is_rejected() {
        let detector = detector_returning(Ok("en".to_string()));
        let err = detector.detect("  abcd  ").unwrap_err();
        assert_eq!(err.to_string(), "Text is too short for reliable language detection");
    }

    #[test]
    fn test_five_characters_is_enough() {
        let detector = detector_returning(Ok("en".to_string()));
        assert_eq!(detector.detect("hello").unwrap(), "en");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four characters, twelve bytes
        assert!(validate("日本語だ").is_err());
        assert!(validate("日本語です").is_ok());
    }

    // ==================== Identifier Failure Tests ====================

    #[test]
    fn test_no_features_maps_to_detection_failed() {
        let detector =
            detector_returning(Err(IdentifyError::NoFeatures("No features in text.".to_string())));
        let err = detector.detect("12345 67890").unwrap_err();

        assert_eq!(
            err,
            DetectionError::DetectionFailed("No features in text.".to_string())
        );
        assert_eq!(err.to_string(), "Language detection error: No features in text.");
    }

    #[test]
    fn test_other_failure_maps_to_unexpected() {
        let detector = detector_returning(Err(IdentifyError::Other("model missing".to_string())));
        let err = detector.detect("Some valid text").unwrap_err();

        assert_eq!(err.to_string(), "An unexpected error occurred: model missing");
    }

    #[test]
    fn test_identifier_not_called_for_invalid_input() {
        struct PanickingIdentifier;

        impl LanguageIdentifier for PanickingIdentifier {
            fn identify(&self, _text: &str) -> Result<String, IdentifyError> {
                panic!("identifier must not be called for invalid input");
            }

            fn identifier_name(&self) -> &str {
                "panicking"
            }
        }

        let detector = Detector::new(Arc::new(PanickingIdentifier));
        assert!(detector.detect("hi").is_err());
        assert!(detector.detect("").is_err());
    }

    // ==================== Preview Tests ====================

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Bonjour"), "Bonjour");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "a".repeat(80);
        let shown = preview(&text);
        assert_eq!(shown, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(60);
        assert_eq!(preview(&text).chars().count(), 53);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_short_input_never_reaches_identifier(text in "\\s{0,3}\\PC{0,4}\\s{0,3}") {
            let detector = detector_returning(Err(IdentifyError::Other("called".to_string())));
            let err = detector.detect(&text).unwrap_err();
            let expected = if text.trim().is_empty() {
                EMPTY_TEXT_MESSAGE
            } else {
                SHORT_TEXT_MESSAGE
            };
            prop_assert_eq!(err.to_string(), expected);
        }
    }
}

//! Language registry: single source of truth for language display names.
//!
//! Uses a `OnceLock` singleton so the table is initialized lazily and shared
//! without locking.

use std::sync::OnceLock;

/// Display name returned for codes that are not in the table.
pub const UNKNOWN_LANGUAGE: &str = "Unknown language";

/// Metadata for a known language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Detector language code (ISO 639-1, plus "zh-cn"/"zh-tw")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Whether this is the canonical language translations are made into
    pub is_canonical: bool,
}

const ENGLISH: LanguageConfig = LanguageConfig {
    code: "en",
    name: "English",
    is_canonical: true,
};

/// Codes emitted by the detector and their display names.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
];

/// Global language registry.
///
/// Immutable after initialization; lookups never fail.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Display name for a language code.
    ///
    /// Total: codes missing from the table resolve to [`UNKNOWN_LANGUAGE`].
    pub fn name_for(&self, code: &str) -> &'static str {
        self.get_by_code(code)
            .map(|lang| lang.name)
            .unwrap_or(UNKNOWN_LANGUAGE)
    }

    /// Get all languages in the table.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The canonical language (English), the target of every translation.
    pub fn canonical(&self) -> &LanguageConfig {
        &ENGLISH
    }

    /// Check if a code refers to the canonical language.
    pub fn is_canonical(&self, code: &str) -> bool {
        code == self.canonical().code
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    let mut languages = vec![ENGLISH];
    languages.extend(LANGUAGE_NAMES.iter().map(|&(code, name)| LanguageConfig {
        code,
        name,
        is_canonical: false,
    }));
    languages
}

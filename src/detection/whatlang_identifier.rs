//! Whatlang-based language identifier
//!
//! Uses the whatlang crate for fast, trigram-based identification and maps its
//! ISO 639-3 codes onto the two-letter codes of the language table.

use super::{IdentifyError, LanguageIdentifier};
use whatlang::{Detector, Lang};

/// Language identifier backed by whatlang.
pub struct WhatlangIdentifier {
    detector: Detector,
}

impl WhatlangIdentifier {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, text: &str) -> Result<String, IdentifyError> {
        let info = self
            .detector
            .detect(text)
            .ok_or_else(|| IdentifyError::NoFeatures("No features in text.".to_string()))?;

        if !info.is_reliable() {
            tracing::debug!(
                "Low confidence detection: {:?} ({:.2})",
                info.lang(),
                info.confidence()
            );
        }

        Ok(short_code(info.lang()).to_string())
    }

    fn identifier_name(&self) -> &str {
        "whatlang"
    }
}

/// Map a whatlang language onto the detector codes used by the language table.
///
/// Languages without a two-letter equivalent in the table keep their
/// three-letter code.
fn short_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Afr => "af",
        Lang::Ara => "ar",
        Lang::Bul => "bg",
        Lang::Ben => "bn",
        Lang::Cat => "ca",
        Lang::Ces => "cs",
        Lang::Dan => "da",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Est => "et",
        Lang::Pes => "fa",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hrv => "hr",
        Lang::Hun => "hu",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kor => "ko",
        Lang::Lit => "lt",
        Lang::Lav => "lv",
        Lang::Mkd => "mk",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Nep => "ne",
        Lang::Nld => "nl",
        Lang::Nob => "no",
        Lang::Pan => "pa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tha => "th",
        Lang::Tgl => "tl",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Vie => "vi",
        Lang::Cmn => "zh-cn",
        other => other.code(),
    }
}

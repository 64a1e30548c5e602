//! Language code table.
//!
//! Maps the short identifiers produced by language detectors (e.g. "en",
//! "zh-cn") to English display names. The table is built once on first access
//! and is read-only afterwards, so it can be shared freely between requests.

mod registry;

pub use registry::{LanguageConfig, LanguageRegistry, UNKNOWN_LANGUAGE};

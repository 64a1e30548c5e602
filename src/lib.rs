//! Language detection service.
//!
//! Identifies the natural language of free text and translates it into
//! English. Detection and translation are delegated to injectable
//! capabilities; this crate validates input, names the detected language and
//! shapes the response for the web and console interfaces.

pub mod analyzer;
pub mod config;
pub mod console;
pub mod detection;
pub mod language;
pub mod server;
pub mod translation;

use anyhow::Result;

/// Install the process-wide tracing subscriber.
///
/// Called once by each binary. Logs go to stderr so they never interleave
/// with console output. `RUST_LOG` directives are honoured on top of the
/// configured level for this crate.
pub fn init_logging(config: &config::Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("language_detector={}", config.log_level).parse()?)
                .add_directive(format!("tower_http={}", config.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

//! Interactive console for the language detector.
//!
//! Usage: cargo run --bin console

use anyhow::{Context, Result};
use language_detector::{
    analyzer::LanguageAnalyzer, config::Config, console, detection::Detector,
    translation::Translator,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    language_detector::init_logging(&config)?;

    let translator =
        Translator::from_config(&config).context("Failed to initialize translator")?;
    let analyzer = LanguageAnalyzer::new(Detector::whatlang(), translator);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    console::run(&analyzer, stdin, &mut stdout).await?;

    Ok(())
}

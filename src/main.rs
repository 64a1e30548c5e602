use anyhow::{Context, Result};
use language_detector::{
    analyzer::LanguageAnalyzer,
    config::Config,
    detection::Detector,
    server::{self, AppState},
    translation::Translator,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    language_detector::init_logging(&config)?;

    info!("Starting language detector web server");

    if config.uses_dev_session_secret() {
        warn!("SESSION_SECRET not set, using the development fallback");
    }

    let translator =
        Translator::from_config(&config).context("Failed to initialize translator")?;
    let analyzer = LanguageAnalyzer::new(Detector::whatlang(), translator);
    let app = server::router(AppState::new(analyzer));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("🚀 Server running at http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}

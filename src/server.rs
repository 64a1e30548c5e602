//! HTTP interface: index page, detection endpoint, error pages.

use crate::analyzer::{DetectionResult, LanguageAnalyzer};
use crate::detection::preview;
use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

const INDEX_PAGE: &str = include_str!("static/index.html");
const NOT_FOUND_PAGE: &str = include_str!("static/404.html");
const SERVER_ERROR_PAGE: &str = include_str!("static/500.html");

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<LanguageAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: LanguageAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DetectForm {
    #[serde(default)]
    pub text: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/detect", post(detect))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(server_error))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn html(status: StatusCode, page: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        page,
    )
        .into_response()
}

async fn serve_index() -> Response {
    html(StatusCode::OK, INDEX_PAGE)
}

/// Detection failures are reported in the payload, never as an HTTP error.
async fn detect(
    State(state): State<AppState>,
    form: Result<Form<DetectForm>, FormRejection>,
) -> Json<DetectionResult> {
    let text = match form {
        Ok(Form(form)) => form.text,
        Err(rejection) => {
            debug!("Unreadable detection form, treating text as empty: {}", rejection);
            String::new()
        }
    };

    debug!("Received text for detection: {}", preview(&text));

    Json(state.analyzer.analyze(&text).await)
}

async fn not_found() -> Response {
    html(StatusCode::NOT_FOUND, NOT_FOUND_PAGE)
}

fn server_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Server error: {}", details);
    html(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_PAGE)
}

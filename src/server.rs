use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use eyre::{Result, WrapErr};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::error::Error;
use crate::resolver;
use crate::youtube::TranscriptApi;

#[derive(Clone)]
pub struct AppState {
    api: Arc<dyn TranscriptApi>,
    fallback_lang: Arc<str>,
}

impl AppState {
    pub fn new(api: Arc<dyn TranscriptApi>, fallback_lang: &str) -> Self {
        Self {
            api,
            fallback_lang: Arc::from(fallback_lang),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub success: bool,
    pub video_id: String,
    pub transcript_text: String,
    pub length: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_id: Option<String>,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingUrl | Error::InvalidUrl(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NoTranscript { .. } => StatusCode::NOT_FOUND,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            success: false,
            error: self.to_string(),
            video_id: self.video_id().map(str::to_string),
        });
        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/transcript", post(transcript))
        .with_state(state)
}

/// Bind `host:port`, resolving host names, IPv4 and IPv6 literals alike
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .wrap_err_with(|| format!("failed to bind {host} port {port}"))
}

/// Bind `host:port` and serve until Ctrl-C
pub async fn serve(host: &str, port: u16, state: AppState) -> Result<()> {
    let listener = bind(host, port).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "Online",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["GET /health", "POST /transcript {\"url\": \"<YouTube URL or video ID>\"}"],
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn transcript(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TranscriptRequest>, JsonRejection>,
) -> std::result::Result<Json<TranscriptResponse>, Error> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        Error::BadRequest(rejection.body_text())
    })?;

    let url = request.url.unwrap_or_default();
    if url.trim().is_empty() {
        warn!("Request without url");
        return Err(Error::MissingUrl);
    }

    let video_id = crate::extract_video_id(&url).ok_or_else(|| {
        warn!("Could not extract video ID from: {url}");
        Error::InvalidUrl(url.clone())
    })?;
    info!("Transcript requested for {video_id}");

    // Resolution runs in its own task so a panic surfaces as a 500, not a dropped connection
    let api = Arc::clone(&state.api);
    let lang = Arc::clone(&state.fallback_lang);
    let id = video_id.clone();
    let resolved = tokio::spawn(async move { resolver::resolve(api.as_ref(), &id, &lang).await })
        .await
        .map_err(|e| {
            error!("Transcript task for {video_id} failed: {e}");
            Error::Internal(e.to_string())
        })?
        .inspect_err(|e| warn!("{e}"))?;

    Ok(Json(TranscriptResponse {
        success: true,
        length: resolved.text.chars().count(),
        video_id: resolved.video_id,
        transcript_text: resolved.text,
    }))
}

//! HTTP surface
//!
//! One POST endpoint wrapping the analysis service plus a health check.
//! Validation failures map to stable error codes with 4xx statuses;
//! anything unexpected surfaces as an opaque `INTERNAL_ERROR`, with
//! diagnostic detail included only outside production.

use crate::config::Config;
use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use crate::input::manager::extract_from_bytes;
use crate::output::assembler::{AnalysisResponse, ParsedResumeInfo, ResponseMetadata};
use crate::service::AnalysisService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
    pub production: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub resume_file: Option<ResumeFileUpload>,
    pub job_role: Option<String>,
    pub company: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFileUpload {
    pub file_name: String,
    /// Declared type: "pdf" | "docx" | "text"
    pub file_type: String,
    /// Base64-encoded file bytes
    pub content: String,
}

/// Request-level failure with a stable wire code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<String>,
}

impl ApiError {
    fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code,
            message: message.into(),
            details: None,
        }
    }

    fn internal(err: &ResumeAtsError, production: bool) -> Self {
        error!("analysis request failed: {}", err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: "An error occurred during analysis".to_string(),
            details: (!production).then(|| err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "code": self.code,
            "message": self.message,
        });
        if let Some(details) = self.details {
            error["details"] = json!(details);
        }

        let body = Json(json!({
            "success": false,
            "error": error,
            "metadata": ResponseMetadata::empty(),
        }));

        (self.status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/analyze", post(analyze_endpoint))
        .route("/health", get(health_endpoint))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and run the server with collaborators built from config.
pub async fn serve(config: Config) -> Result<()> {
    let model = match config.api_key() {
        Some(api_key) => {
            info!("generative model enabled: {}", config.ai.model);
            Some(Arc::new(crate::ai::GeminiClient::new(&config.ai, api_key)?)
                as Arc<dyn crate::ai::GenerativeModel>)
        }
        None => {
            info!(
                "no API key in ${}; AI suggestions will use fallback payloads",
                config.ai.api_key_env
            );
            None
        }
    };

    let state = AppState {
        service: Arc::new(AnalysisService::new(model)?),
        production: config.is_production(),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ResumeAtsError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!("listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| ResumeAtsError::Server(e.to_string()))?;

    Ok(())
}

async fn analyze_endpoint(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> std::result::Result<Json<AnalysisResponse>, ApiError> {
    let job_role = request
        .job_role
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let company = request
        .company
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (job_role, company) = match (job_role, company) {
        (Some(role), Some(company)) => (role, company),
        _ => {
            return Err(ApiError::bad_request(
                "MISSING_FIELDS",
                "jobRole and company are required",
            ))
        }
    };

    let (resume_text, parsed_resume) = match (&request.resume_file, &request.resume_text) {
        (Some(upload), _) => {
            let file_type = FileType::from_declared(&upload.file_type);
            if file_type == FileType::Unknown {
                return Err(ApiError::bad_request(
                    "UPLOAD_FAILED",
                    format!("Unsupported file type: {}", upload.file_type),
                ));
            }

            let bytes = base64::engine::general_purpose::STANDARD
                .decode(&upload.content)
                .map_err(|e| {
                    ApiError::bad_request("UPLOAD_FAILED", format!("Invalid file content: {}", e))
                })?;

            let text = extract_from_bytes(&bytes, file_type)
                .map_err(|e| ApiError::internal(&e, state.production))?;

            let parsed = ParsedResumeInfo::from_text(&upload.file_name, &upload.file_type, &text);
            (text, parsed)
        }
        (None, Some(text)) if !text.trim().is_empty() => {
            let parsed = ParsedResumeInfo::from_text("resume", "text", text);
            (text.clone(), parsed)
        }
        _ => {
            return Err(ApiError::bad_request(
                "NO_RESUME",
                "Either resumeFile or resumeText is required",
            ))
        }
    };

    let response = state
        .service
        .analyze(
            &resume_text,
            job_role,
            company,
            request.job_description.as_deref(),
            parsed_resume,
        )
        .await;

    Ok(Json(response))
}

async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

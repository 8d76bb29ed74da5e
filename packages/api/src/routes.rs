//! Request handlers and the JSON error contract.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use summarise::{PipelineError, PipelineOutput, StoreError};

use crate::app::AppState;

/// Shown in place of an empty (but valid) summary.
const NO_SUMMARY_FALLBACK: &str = "No summary available.";

#[derive(Serialize)]
struct SummariseResponse {
    summary: String,
    #[serde(rename = "urduSummary")]
    urdu_summary: String,
    #[serde(rename = "fullText")]
    full_text: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// `POST /api/summarise` — run the pipeline for the URL in the JSON body.
///
/// The body must be a JSON object with a string `url` field; anything else
/// is a client fault before the pipeline even starts.
pub async fn summarise_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid request");
    };
    let Some(url) = body.get("url").and_then(Value::as_str) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid url");
    };

    match state.pipeline.run(url).await {
        Ok(output) => success_response(output),
        Err(error) => pipeline_error_response(error),
    }
}

fn success_response(output: PipelineOutput) -> Response {
    let summary = if output.summary.is_empty() {
        NO_SUMMARY_FALLBACK.to_string()
    } else {
        output.summary
    };

    (
        StatusCode::OK,
        Json(SummariseResponse {
            summary,
            urdu_summary: output.urdu_summary,
            full_text: output.full_text,
        }),
    )
        .into_response()
}

/// Map pipeline failures onto stable per-stage messages: fetch and
/// extraction problems are client faults (400), persistence and
/// configuration problems are server faults (500).
fn pipeline_error_response(error: PipelineError) -> Response {
    warn!(stage = error.stage(), error = %error, "summarise request failed");

    let (status, message) = match &error {
        PipelineError::Fetch(_) => (StatusCode::BAD_REQUEST, "Failed to fetch blog page"),
        PipelineError::Extract(_) => (StatusCode::BAD_REQUEST, "Could not extract blog content"),
        PipelineError::PersistSummary(StoreError::Credentials) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Supabase credentials not set",
        ),
        PipelineError::PersistSummary(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save summary to Supabase",
        ),
        PipelineError::PersistFullText(StoreError::Credentials) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "MongoDB URI not set")
        }
        PipelineError::PersistFullText(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save full text to MongoDB",
        ),
    };

    error_response(status, message)
}

/// `GET /health` — liveness probe.
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

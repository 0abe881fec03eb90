use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use lexis_core::AnalysisResult;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: String,
    /// Overrides the default `.`/`!`/`?` sentence boundaries when non-empty.
    #[serde(default)]
    delimiter: String,
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(req) = payload?;

    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text cannot be empty".to_string()));
    }

    Ok(Json(state.analyzer.analyze(&req.text, &req.delimiter)))
}

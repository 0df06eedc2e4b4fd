use crate::dto::analysis_dto::AnalyzeDocumentRequest;
use crate::middleware::auth::Claims;
use crate::{error::Result, AppState};
use axum::{extract::State, Extension, Json};
use validator::Validate;

pub async fn analyze_document(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AnalyzeDocumentRequest>,
) -> Result<impl axum::response::IntoResponse> {
    payload.validate()?;
    tracing::info!(user_id = %claims.sub, chars = payload.text.len(), "Analyzing document");

    let analysis = state
        .analysis_service
        .analyze(
            &payload.text,
            payload.language.unwrap_or_default(),
            payload.filename.as_deref(),
        )
        .await;

    Ok(Json(analysis))
}

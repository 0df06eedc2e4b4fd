use crate::dto::recruiter_dto::{
    ContinueConversationRequest, RecommendationsResponse, StartConversationRequest,
};
use crate::error::Result;
use crate::middleware::auth::Claims;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

pub async fn start_conversation(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Option<Json<StartConversationRequest>>,
) -> Result<impl axum::response::IntoResponse> {
    let language = payload
        .and_then(|Json(p)| p.language)
        .unwrap_or_default();
    tracing::info!(user_id = %claims.sub, language = language.as_str(), "Starting recruiter conversation");
    let response = state
        .recruiter_service
        .start_conversation(&claims.sub, language)
        .await?;
    Ok(Json(response))
}

pub async fn continue_conversation(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ContinueConversationRequest>,
) -> Result<impl axum::response::IntoResponse> {
    payload.validate()?;
    let response = state
        .recruiter_service
        .continue_conversation(&claims.sub, &payload.message)
        .await?;
    Ok(Json(response))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl axum::response::IntoResponse> {
    let profile = state.recruiter_service.get_profile(&claims.sub).await?;
    Ok(Json(profile))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl axum::response::IntoResponse> {
    let deleted = state.recruiter_service.delete_profile(&claims.sub).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(crate::error::Error::ProfileNotFound)
    }
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl axum::response::IntoResponse> {
    let recommendations = state.recruiter_service.recommendations(&claims.sub).await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}

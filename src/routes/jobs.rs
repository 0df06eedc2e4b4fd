use crate::dto::recruiter_dto::{
    CompatibilityRequest, CoverLetterRequest, CoverLetterResponse, TranslateJobRequest,
    TranslateJobResponse,
};
use crate::middleware::auth::Claims;
use crate::models::job::CompatibilityResult;
use crate::services::prompt_builder::PromptBuilder;
use crate::services::ranker::heuristic_score;
use crate::{error::Result, AppState};
use axum::{extract::State, Extension, Json};

/// Compatibility analysis for a single job against the caller's profile.
/// A failed LLM call degrades to the position heuristic, never to an error.
pub async fn analyze_compatibility(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CompatibilityRequest>,
) -> Result<impl axum::response::IntoResponse> {
    let profile = state.recruiter_service.get_profile(&claims.sub).await?;

    let compatibility = match state.ranker.score_job(&profile, &payload.job).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = ?e, user_id = %claims.sub,
                "Compatibility analysis failed, using heuristic");
            CompatibilityResult::heuristic(heuristic_score(0))
        }
    };

    Ok(Json(compatibility))
}

pub async fn translate_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<TranslateJobRequest>,
) -> Result<impl axum::response::IntoResponse> {
    let profile = state.recruiter_service.get_profile(&claims.sub).await?;
    let target = payload.target_language.unwrap_or(profile.language);

    let prompts = PromptBuilder::new();
    let prompt = prompts.translation_prompt(&payload.job, target);
    let translation = match state.llm_service.generate_content(&prompt, 2048).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = ?e, user_id = %claims.sub,
                "Job translation failed, returning original text");
            prompts.fallback_translation(&payload.job)
        }
    };

    Ok(Json(TranslateJobResponse { translation }))
}

pub async fn generate_cover_letter(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CoverLetterRequest>,
) -> Result<impl axum::response::IntoResponse> {
    let profile = state.recruiter_service.get_profile(&claims.sub).await?;

    let prompts = PromptBuilder::new();
    let prompt = prompts.cover_letter_prompt(&profile, &payload.job);
    let cover_letter = match state.llm_service.generate_content(&prompt, 2048).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = ?e, user_id = %claims.sub,
                "Cover letter generation failed, using template letter");
            prompts.fallback_cover_letter(&profile, &payload.job)
        }
    };

    Ok(Json(CoverLetterResponse { cover_letter }))
}

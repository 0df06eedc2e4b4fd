use crate::models::job::{JobListing, JobRecommendation};
use crate::models::profile::{CollectedData, Language, Stage};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize)]
pub struct StartConversationRequest {
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContinueConversationRequest {
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub message: String,
    pub stage: Stage,
    pub collected_data: CollectedData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<JobRecommendation>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<JobRecommendation>,
}

#[derive(Debug, Deserialize)]
pub struct CompatibilityRequest {
    pub job: JobListing,
}

#[derive(Debug, Deserialize)]
pub struct TranslateJobRequest {
    pub job: JobListing,
    pub target_language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateJobResponse {
    pub translation: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub job: JobListing,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

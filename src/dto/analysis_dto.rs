use crate::models::profile::Language;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeDocumentRequest {
    #[validate(length(min = 1))]
    pub text: String,
    pub language: Option<Language>,
    pub filename: Option<String>,
}

/// Best-effort structured view of the LLM's free-text analysis. Every list
/// may come back empty when the model reorders or reformats its answer; no
/// field is guaranteed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub summary: String,
    pub document_type: String,
    pub key_points: Vec<String>,
    pub required_actions: Vec<String>,
    pub deadlines: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

use serde::{Deserialize, Serialize};

/// A job posting from the external search collaborator. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
}

/// Candidate/job fit estimate, produced per (profile, job) pair and never
/// persisted beyond the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: i32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl CompatibilityResult {
    /// Static placeholder used when no LLM key is configured or a scoring
    /// call fails for an individual job.
    pub fn heuristic(score: i32) -> Self {
        Self {
            score: score.clamp(0, 100),
            strengths: vec!["Profile keywords overlap with the posting".to_string()],
            weaknesses: Vec::new(),
            suggestions: vec!["Review the full posting before applying".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job: JobListing,
    pub compatibility: CompatibilityResult,
}

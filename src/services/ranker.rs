use crate::error::Result;
use crate::models::job::{CompatibilityResult, JobListing, JobRecommendation};
use crate::models::profile::UserProfile;
use crate::services::llm_service::LlmService;
use crate::services::prompt_builder::PromptBuilder;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// How many candidates from the external search are scored at all.
const CANDIDATE_POOL: usize = 15;

/// Position heuristic used when a per-job LLM scoring call fails or no
/// provider key is configured.
pub fn heuristic_score(position: usize) -> i32 {
    (75 - 3 * position as i32).max(40)
}

/// Scores candidate jobs against a profile and returns the best matches,
/// sorted by compatibility score descending (ties keep search-relevance
/// order), truncated to `max_results`.
#[derive(Clone)]
pub struct RecommendationRanker {
    llm: LlmService,
    prompts: PromptBuilder,
}

impl RecommendationRanker {
    pub fn new(llm: LlmService, prompts: PromptBuilder) -> Self {
        Self { llm, prompts }
    }

    pub async fn rank(
        &self,
        profile: &UserProfile,
        candidate_jobs: Vec<JobListing>,
        max_results: usize,
    ) -> Vec<JobRecommendation> {
        if candidate_jobs.is_empty() {
            return demo_recommendations();
        }

        let mut recommendations = Vec::new();
        for (position, job) in candidate_jobs.into_iter().take(CANDIDATE_POOL).enumerate() {
            let compatibility = match self.score_job(profile, &job).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(error = ?e, job = %job.title,
                        "Compatibility scoring failed, using position heuristic");
                    CompatibilityResult::heuristic(heuristic_score(position))
                }
            };
            recommendations.push(JobRecommendation { job, compatibility });
        }

        finalize(recommendations, max_results)
    }

    /// One LLM compatibility analysis for a single (profile, job) pair.
    pub async fn score_job(
        &self,
        profile: &UserProfile,
        job: &JobListing,
    ) -> Result<CompatibilityResult> {
        let prompt = self.prompts.compatibility_prompt(profile, job);
        let mut result: CompatibilityResult = self.llm.generate_json(&prompt, 1024).await?;
        result.score = result.score.clamp(0, 100);
        Ok(result)
    }
}

/// Stable sort by score descending plus truncation; split out so the
/// ordering contract is testable without any provider.
pub fn finalize(
    mut recommendations: Vec<JobRecommendation>,
    max_results: usize,
) -> Vec<JobRecommendation> {
    recommendations.sort_by(|a, b| b.compatibility.score.cmp(&a.compatibility.score));
    recommendations.truncate(max_results);
    recommendations
}

/// The three hard-coded demo postings returned when the search produced
/// nothing at all. Scores are fixed: 85, 80, 75.
pub fn demo_recommendations() -> Vec<JobRecommendation> {
    let demo = [
        (
            "Python Developer",
            "TechBerlin GmbH",
            "Berlin",
            "Backend development for a growing logistics platform.",
            "Python, PostgreSQL, B1 German or English-speaking team",
            "55000-65000 EUR",
            85,
        ),
        (
            "Software Engineer",
            "DataWorks AG",
            "Munich",
            "Data pipelines and internal tooling.",
            "Python or Java, SQL, willingness to learn German",
            "60000-70000 EUR",
            80,
        ),
        (
            "IT Support Specialist",
            "CloudService GmbH",
            "Hamburg",
            "First and second level support for business customers.",
            "Windows/Linux basics, A2-B1 German",
            "38000-45000 EUR",
            75,
        ),
    ];

    demo.into_iter()
        .map(
            |(title, company, location, description, requirements, salary, score)| {
                JobRecommendation {
                    job: JobListing {
                        title: title.to_string(),
                        company_name: company.to_string(),
                        location: location.to_string(),
                        description: description.to_string(),
                        requirements: Some(requirements.to_string()),
                        salary: Some(salary.to_string()),
                    },
                    compatibility: CompatibilityResult::heuristic(score),
                }
            },
        )
        .collect()
}

pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    analysis_service::AnalysisService, job_search_service::JobSearchService,
    llm_service::LlmService, profile_store::ProfileStore, prompt_builder::PromptBuilder,
    ranker::RecommendationRanker, recruiter_service::RecruiterService,
};
use reqwest::Client;
use sqlx::SqlitePool;

/// Shared application state, constructed once at startup and cloned into
/// request handlers. No global service singletons.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub llm_service: LlmService,
    pub job_search_service: JobSearchService,
    pub ranker: RecommendationRanker,
    pub recruiter_service: RecruiterService,
    pub analysis_service: AnalysisService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");

        let prompts = PromptBuilder::new();
        let llm_service = LlmService::new(
            http_client.clone(),
            config.gemini_api_key.clone(),
            config.openai_api_key.clone(),
            config.anthropic_api_key.clone(),
        );
        let job_search_service =
            JobSearchService::new(http_client, config.job_search_url.clone());
        let ranker = RecommendationRanker::new(llm_service.clone(), prompts);
        let profile_store = ProfileStore::new(pool.clone());
        let recruiter_service = RecruiterService::new(
            profile_store,
            llm_service.clone(),
            job_search_service.clone(),
            ranker.clone(),
        );
        let analysis_service = AnalysisService::new(llm_service.clone(), prompts);

        Self {
            pool,
            llm_service,
            job_search_service,
            ranker,
            recruiter_service,
            analysis_service,
        }
    }
}

pub mod analysis_service;
pub mod extractor;
pub mod job_search_service;
pub mod llm_service;
pub mod profile_store;
pub mod prompt_builder;
pub mod ranker;
pub mod recruiter_service;

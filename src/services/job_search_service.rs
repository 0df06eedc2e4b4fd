use crate::error::Result;
use crate::models::job::JobListing;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    jobs: Vec<JobListing>,
}

/// Client for the external job-search collaborator. A total search failure
/// degrades to an empty list, which routes the ranker onto its demo postings.
#[derive(Clone)]
pub struct JobSearchService {
    client: Client,
    base_url: Option<String>,
}

impl JobSearchService {
    pub fn new(client: Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }

    pub async fn search_jobs(
        &self,
        location: Option<&str>,
        language_level: Option<&str>,
        search_query: Option<&str>,
    ) -> Vec<JobListing> {
        match self.fetch(location, language_level, search_query).await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::warn!(error = ?e, "Job search failed, falling back to empty result");
                Vec::new()
            }
        }
    }

    async fn fetch(
        &self,
        location: Option<&str>,
        language_level: Option<&str>,
        search_query: Option<&str>,
    ) -> Result<Vec<JobListing>> {
        let Some(base_url) = &self.base_url else {
            return Ok(Vec::new());
        };

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(location) = location {
            params.push(("location", location));
        }
        if let Some(level) = language_level {
            params.push(("language_level", level));
        }
        if let Some(query) = search_query {
            params.push(("search_query", query));
        }

        let url = format!("{}/api/search", base_url.trim_end_matches('/'));
        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Job search API returned an error status");
            return Ok(Vec::new());
        }

        let body: SearchResponse = response.json().await?;
        if body.status != "success" {
            tracing::warn!(status = %body.status, "Job search API reported failure");
            return Ok(Vec::new());
        }
        Ok(body.jobs)
    }
}

use crate::dto::recruiter_dto::ConversationResponse;
use crate::error::{Error, Result};
use crate::models::job::JobRecommendation;
use crate::models::profile::{ConversationTurn, Language, UserProfile};
use crate::services::extractor::ResponseExtractor;
use crate::services::job_search_service::JobSearchService;
use crate::services::llm_service::LlmService;
use crate::services::profile_store::ProfileStore;
use crate::services::prompt_builder::PromptBuilder;
use crate::services::ranker::{RecommendationRanker, MAX_RECOMMENDATIONS};
use chrono::Utc;

/// The recruiter conversation state machine: one turn per request, read →
/// extract → advance stage → generate reply → write back. Last save wins.
#[derive(Clone)]
pub struct RecruiterService {
    store: ProfileStore,
    llm: LlmService,
    job_search: JobSearchService,
    ranker: RecommendationRanker,
    extractor: ResponseExtractor,
    prompts: PromptBuilder,
}

impl RecruiterService {
    pub fn new(
        store: ProfileStore,
        llm: LlmService,
        job_search: JobSearchService,
        ranker: RecommendationRanker,
    ) -> Self {
        Self {
            store,
            llm,
            job_search,
            ranker,
            extractor: ResponseExtractor::new(),
            prompts: PromptBuilder::new(),
        }
    }

    /// Create (or reset) the profile and open the conversation.
    pub async fn start_conversation(
        &self,
        user_id: &str,
        language: Language,
    ) -> Result<ConversationResponse> {
        let profile = UserProfile::new(user_id, language);
        self.store.save(&profile).await?;

        Ok(ConversationResponse {
            message: self.prompts.greeting(language),
            stage: profile.stage,
            collected_data: profile.collected_data,
            recommendations: None,
        })
    }

    /// One conversation turn. Re-entering a complete profile regenerates
    /// recommendations instead of advancing further.
    pub async fn continue_conversation(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<ConversationResponse> {
        let mut profile = self
            .store
            .load(user_id)
            .await?
            .ok_or(Error::ProfileNotFound)?;

        let extracted = self.extractor.extract(message, profile.stage);
        for (key, value) in extracted.clone() {
            profile.collected_data.insert(key, value);
        }

        let stage = profile.stage.next(&profile.collected_data);
        profile.stage = stage;

        let prompt = self.prompts.conversation_prompt(&profile, stage, message);
        let ai_message = match self.llm.generate_content(&prompt, 1024).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = ?e, user_id, "LLM reply failed, using canned text");
                self.prompts.fallback_reply(stage, profile.language)
            }
        };

        let recommendations = if stage.is_complete() {
            Some(self.build_recommendations(&profile).await)
        } else {
            None
        };

        profile.conversation_history.push(ConversationTurn {
            timestamp: Utc::now(),
            stage,
            ai_message: ai_message.clone(),
            user_message: message.to_string(),
            extracted_data: extracted,
        });
        profile.updated_at = Utc::now();
        self.store.save(&profile).await?;

        Ok(ConversationResponse {
            message: ai_message,
            stage,
            collected_data: profile.collected_data,
            recommendations,
        })
    }

    /// Refresh recommendations for an already complete profile.
    pub async fn recommendations(&self, user_id: &str) -> Result<Vec<JobRecommendation>> {
        let profile = self
            .store
            .load(user_id)
            .await?
            .ok_or(Error::ProfileNotFound)?;

        if !profile.stage.is_complete() {
            return Err(Error::BadRequest(
                "Profile is not complete yet; continue the conversation first".to_string(),
            ));
        }

        Ok(self.build_recommendations(&profile).await)
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.store
            .load(user_id)
            .await?
            .ok_or(Error::ProfileNotFound)
    }

    pub async fn delete_profile(&self, user_id: &str) -> Result<bool> {
        self.store.delete(user_id).await
    }

    async fn build_recommendations(&self, profile: &UserProfile) -> Vec<JobRecommendation> {
        let jobs = self
            .job_search
            .search_jobs(
                profile.collected_str("preferred_city"),
                profile.collected_str("german_level"),
                profile.collected_str("profession"),
            )
            .await;
        self.ranker.rank(profile, jobs, MAX_RECOMMENDATIONS).await
    }
}

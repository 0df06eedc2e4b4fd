use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Accumulating key/value map of facts extracted from user replies.
/// Fields are optional by design; stage advancement checks the number of
/// collected fields, not which fields are present.
pub type CollectedData = serde_json::Map<String, JsonValue>;

/// A step in the fixed recruiter conversation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Initial,
    Skills,
    Preferences,
    Complete,
}

/// Transition table: (from, minimum collected fields, to). A stage not listed
/// here, or listed with an unmet threshold, stays where it is.
const TRANSITIONS: &[(Stage, usize, Stage)] = &[
    (Stage::Initial, 2, Stage::Skills),
    (Stage::Skills, 4, Stage::Complete),
    // Kept for profiles persisted by the earlier flow that used an explicit
    // preferences step; it advances unconditionally on the next turn.
    (Stage::Preferences, 0, Stage::Complete),
];

impl Stage {
    /// Resolve the successor stage for the current collected data. Pure and
    /// idempotent; `Complete` is terminal.
    pub fn next(self, collected_data: &CollectedData) -> Stage {
        for &(from, min_fields, to) in TRANSITIONS {
            if from == self && collected_data.len() >= min_fields {
                return to;
            }
        }
        self
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Stage::Complete)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Initial => "initial",
            Stage::Skills => "skills",
            Stage::Preferences => "preferences",
            Stage::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
    De,
    Uk,
    Es,
    Fr,
}

impl Language {
    /// Prompt templates exist for ru/en and partially de; everything else
    /// falls back to ru.
    pub fn template(self) -> Language {
        match self {
            Language::En => Language::En,
            Language::De => Language::De,
            _ => Language::Ru,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::De => "de",
            Language::Uk => "uk",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Language::Ru => "Russian",
            Language::En => "English",
            Language::De => "German",
            Language::Uk => "Ukrainian",
            Language::Es => "Spanish",
            Language::Fr => "French",
        }
    }
}

/// One conversation turn as stored in the profile history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub timestamp: DateTime<Utc>,
    pub stage: Stage,
    pub ai_message: String,
    pub user_message: String,
    pub extracted_data: CollectedData,
}

/// The recruiter conversation profile. Owned by the profile store, mutated
/// only by conversation continuation, deleted only explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub language: Language,
    pub stage: Stage,
    pub collected_data: CollectedData,
    pub conversation_history: Vec<ConversationTurn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, language: Language) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            language,
            stage: Stage::Initial,
            collected_data: CollectedData::new(),
            conversation_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn collected_str(&self, key: &str) -> Option<&str> {
        self.collected_data.get(key).and_then(|v| v.as_str())
    }
}

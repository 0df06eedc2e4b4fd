use crate::error::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::time::Duration;

const GEMINI_MODEL: &str = "gemini-1.5-flash";
const OPENAI_MODEL: &str = "gpt-4o-mini";
const ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
    Anthropic,
}

/// Opaque text-generation capability over up to three configured provider
/// keys; the first configured one takes priority. No retries: a failed call
/// surfaces as an error the caller replaces with fallback content.
#[derive(Clone)]
pub struct LlmService {
    client: Client,
    gemini_key: Option<String>,
    openai_key: Option<String>,
    anthropic_key: Option<String>,
}

impl LlmService {
    pub fn new(
        client: Client,
        gemini_key: Option<String>,
        openai_key: Option<String>,
        anthropic_key: Option<String>,
    ) -> Self {
        Self {
            client,
            gemini_key,
            openai_key,
            anthropic_key,
        }
    }

    pub fn provider(&self) -> Option<Provider> {
        if self.gemini_key.is_some() {
            Some(Provider::Gemini)
        } else if self.openai_key.is_some() {
            Some(Provider::OpenAi)
        } else if self.anthropic_key.is_some() {
            Some(Provider::Anthropic)
        } else {
            None
        }
    }

    pub async fn generate_content(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        match self.provider() {
            Some(Provider::Gemini) => self.call_gemini(prompt, max_tokens).await,
            Some(Provider::OpenAi) => self.call_openai(prompt, max_tokens).await,
            Some(Provider::Anthropic) => self.call_anthropic(prompt, max_tokens).await,
            None => Err(Error::LlmUnavailable(
                "No LLM provider key configured".to_string(),
            )),
        }
    }

    /// Generate and parse a JSON reply, tolerating markdown code fences
    /// around the object.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<T> {
        let raw = self.generate_content(prompt, max_tokens).await?;
        let cleaned = strip_code_fences(&raw);
        Ok(serde_json::from_str(cleaned)?)
    }

    async fn call_gemini(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let key = self.gemini_key.as_deref().unwrap_or_default();
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            GEMINI_MODEL, key
        );
        let payload = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"maxOutputTokens": max_tokens}
        });

        let res = self
            .client
            .post(&url)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Gemini API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|t| t.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid Gemini response format").into())
    }

    async fn call_openai(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let key = self.openai_key.as_deref().unwrap_or_default();
        let payload = serde_json::json!({
            "model": OPENAI_MODEL,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": max_tokens
        });

        let res = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("OpenAI API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;
        body.pointer("/choices/0/message/content")
            .and_then(|t| t.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid OpenAI response format").into())
    }

    async fn call_anthropic(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let key = self.anthropic_key.as_deref().unwrap_or_default();
        let payload = serde_json::json!({
            "model": ANTHROPIC_MODEL,
            "max_tokens": max_tokens,
            "messages": [{"role": "user", "content": prompt}]
        });

        let res = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", key)
            .header("anthropic-version", "2023-06-01")
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Anthropic API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;
        body.pointer("/content/0/text")
            .and_then(|t| t.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid Anthropic response format").into())
    }
}

/// Models frequently wrap JSON in ```json fences despite instructions.
pub fn strip_code_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

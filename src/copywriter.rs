//! Marketing copy generation.
//!
//! One chat-completions call per generated site. The model is asked for a
//! JSON object and the answer is held to a strict shape: any missing field,
//! over-long value or transport failure is a [`CopyError`]. Nothing is
//! truncated or retried; copy is required content, so the caller aborts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::CopyConfig;
use crate::types::MarketingCopy;

pub const MAX_HEADLINE_CHARS: usize = 100;
pub const MAX_SUBHEADLINE_CHARS: usize = 200;
pub const MAX_CTA_CHARS: usize = 50;
pub const MAX_SEO_KEYWORDS: usize = 6;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("copy API key not set (expected in ${0})")]
    MissingApiKey(String),
    #[error("copy request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("copy service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("copy service returned no content")]
    EmptyResponse,
    #[error("copy response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("copy response rejected: {0}")]
    Invalid(String),
}

/// What the generator is told about the brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyRequest {
    pub brand_name: String,
    pub industry: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
    pub seo_keywords: Vec<String>,
}

impl GeneratedCopy {
    /// Check the length limits every template is laid out for.
    pub fn validate(&self) -> Result<(), CopyError> {
        let check = |field: &str, value: &str, max: usize| {
            let len = value.chars().count();
            if value.trim().is_empty() {
                Err(CopyError::Invalid(format!("{field} is empty")))
            } else if len > max {
                Err(CopyError::Invalid(format!(
                    "{field} is {len} characters (max {max})"
                )))
            } else {
                Ok(())
            }
        };
        check("headline", &self.headline, MAX_HEADLINE_CHARS)?;
        check("subheadline", &self.subheadline, MAX_SUBHEADLINE_CHARS)?;
        check("cta", &self.cta, MAX_CTA_CHARS)?;
        if self.seo_keywords.len() > MAX_SEO_KEYWORDS {
            return Err(CopyError::Invalid(format!(
                "{} seo_keywords (max {MAX_SEO_KEYWORDS})",
                self.seo_keywords.len()
            )));
        }
        Ok(())
    }

    pub fn marketing_copy(&self) -> MarketingCopy {
        MarketingCopy {
            headline: self.headline.clone(),
            subheadline: self.subheadline.clone(),
            cta: self.cta.clone(),
        }
    }
}

#[async_trait]
pub trait CopyGenerator: Send + Sync {
    async fn generate(&self, request: &CopyRequest) -> Result<GeneratedCopy, CopyError>;
}

/// Parse and validate the model's JSON answer.
pub fn parse_copy(content: &str) -> Result<GeneratedCopy, CopyError> {
    let copy: GeneratedCopy = serde_json::from_str(content.trim())?;
    copy.validate()?;
    Ok(copy)
}

const SYSTEM_PROMPT: &str = "You are an expert marketing copywriter. \
Write concise, persuasive landing page copy. \
Respond with a single JSON object and nothing else.";

/// User message for one brand.
pub fn build_prompt(request: &CopyRequest) -> String {
    format!(
        "Write landing page copy for the brand below.\n\
         \n\
         Brand: {brand}\n\
         Industry: {industry}\n\
         Description: {description}\n\
         \n\
         Return JSON with exactly these keys:\n\
         - \"headline\": at most {MAX_HEADLINE_CHARS} characters\n\
         - \"subheadline\": at most {MAX_SUBHEADLINE_CHARS} characters\n\
         - \"cta\": call-to-action button text, at most {MAX_CTA_CHARS} characters\n\
         - \"seo_keywords\": array of at most {MAX_SEO_KEYWORDS} keywords",
        brand = request.brand_name,
        industry = request.industry,
        description = request.description,
    )
}

// =============================================================================
// OpenAI-compatible client
// =============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Deserialize)]
struct ChatContent {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiCopyGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiCopyGenerator {
    pub fn new(config: &CopyConfig, api_key: String) -> Result<Self, CopyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Read the API key from the environment variable named in config.
    pub fn from_env(config: &CopyConfig) -> Result<Self, CopyError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CopyError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }
}

#[async_trait]
impl CopyGenerator for OpenAiCopyGenerator {
    async fn generate(&self, request: &CopyRequest) -> Result<GeneratedCopy, CopyError> {
        let prompt = build_prompt(request);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CopyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CopyError::EmptyResponse)?;
        let copy = parse_copy(&content)?;
        tracing::debug!(brand = %request.brand_name, headline = %copy.headline, "generated copy");
        Ok(copy)
    }
}

//! HTTP client for the notification drafter. One POST to an
//! OpenAI-compatible `/chat/completions` endpoint per request; the caller
//! owns any retry decision.

use crate::error::AiDraftError;
use crate::types::{DraftRequest, DraftResponse};
use crate::{extract, prompt, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

// ---------------------------------------------------------------------------
// DraftClient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DraftClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl DraftClient {
    /// A client against the default Groq endpoint. The key is validated at
    /// request time so a keyless client can still be constructed (hosts
    /// disable the AI affordance in that case).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Draft notification content. Always produces all three fields; see
    /// [`extract::parse_draft`] for how loosely formatted responses are
    /// handled.
    pub async fn draft(&self, request: &DraftRequest) -> Result<DraftResponse> {
        if self.api_key.is_empty() {
            return Err(AiDraftError::MissingApiKey);
        }

        let prompt = prompt::notification_prompt(request);
        tracing::debug!(channel = %request.channel, model = %self.model, "requesting AI draft");

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let completion: ChatCompletion = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| AiDraftError::UpstreamFormat {
                reason: "completion had no choices".to_string(),
                raw: String::new(),
            })?;

        extract::parse_draft(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

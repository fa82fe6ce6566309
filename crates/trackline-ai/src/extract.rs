//! Response extraction: shape whatever text the model returned into a
//! [`DraftResponse`], tolerating the formatting smaller models emit despite
//! JSON-only instructions.
//!
//! Pipeline: trim → unwrap a `{"content": ...}` envelope → strip markdown
//! code fences → parse → on failure, salvage the widest `{...}` substring →
//! validate that all three fields are present and non-empty.

use crate::error::AiDraftError;
use crate::types::DraftResponse;
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static FENCE_RE: OnceLock<Regex> = OnceLock::new();
static FENCE_OPEN_RE: OnceLock<Regex> = OnceLock::new();
static FENCE_CLOSE_RE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| Regex::new(r"(?s)^```(?:json)?\s*\n?(.*?)\n?```\s*$").unwrap())
}

fn fence_open_re() -> &'static Regex {
    FENCE_OPEN_RE.get_or_init(|| Regex::new(r"^```(?:json)?\s*").unwrap())
}

fn fence_close_re() -> &'static Regex {
    FENCE_CLOSE_RE.get_or_init(|| Regex::new(r"\s*```$").unwrap())
}

// ---------------------------------------------------------------------------
// Fence stripping
// ---------------------------------------------------------------------------

/// Remove an optional markdown code-fence wrapper (` ```json … ``` ` or
/// bare ` ``` … ``` `). A full-match fence is unwrapped cleanly; otherwise
/// stray leading/trailing fence markers are stripped as a fallback.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if let Some(caps) = fence_re().captures(trimmed) {
        return caps[1].trim().to_string();
    }
    let without_open = fence_open_re().replace(trimmed, "");
    fence_close_re().replace(&without_open, "").trim().to_string()
}

/// The widest `{...}` substring, for responses that bury the object in
/// surrounding prose.
fn widest_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

// ---------------------------------------------------------------------------
// Draft parsing
// ---------------------------------------------------------------------------

/// Parse the model's raw completion text into a [`DraftResponse`].
///
/// Fails with [`AiDraftError::UpstreamFormat`] when no JSON object can be
/// recovered or when any of the three expected fields is missing or empty.
pub fn parse_draft(raw: &str) -> Result<DraftResponse> {
    let mut text = raw.trim().to_string();

    // Some transports wrap the completion in a {"content": "..."} envelope;
    // unwrap it before looking for the draft object.
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&text) {
        if let Some(Value::String(content)) = map.get("content") {
            text = content.trim().to_string();
        }
    }

    text = strip_code_fence(&text);

    let value = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(first_err) => {
            tracing::warn!(error = %first_err, "draft response is not bare JSON, salvaging");
            let salvaged = widest_json_object(&text)
                .and_then(|candidate| serde_json::from_str::<Value>(candidate).ok());
            match salvaged {
                Some(value) => value,
                None => {
                    tracing::error!(raw, "AI returned invalid JSON");
                    return Err(AiDraftError::UpstreamFormat {
                        reason: "invalid JSON".to_string(),
                        raw: raw.to_string(),
                    });
                }
            }
        }
    };

    let object = value.as_object().ok_or_else(|| AiDraftError::UpstreamFormat {
        reason: "expected a JSON object".to_string(),
        raw: raw.to_string(),
    })?;

    let field = |name: &str| -> Result<String> {
        match object.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => {
                tracing::error!(raw, field = name, "AI response missing required field");
                Err(AiDraftError::UpstreamFormat {
                    reason: format!("missing required field '{name}'"),
                    raw: raw.to_string(),
                })
            }
        }
    };

    Ok(DraftResponse {
        email_subject: field("emailSubject")?,
        email_body: field("emailBody")?,
        timeline_message: field("timelineMessage")?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DraftChannel
// ---------------------------------------------------------------------------

/// Which destination the caller is drafting for. Informational: the model
/// is always asked for all three fields regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftChannel {
    Email,
    Timeline,
    Both,
}

impl DraftChannel {
    /// Derive the channel from the notification's selected channel flags.
    /// The timeline channel is always on in practice, so "email selected"
    /// means both.
    pub fn from_selection(email: bool, timeline: bool) -> DraftChannel {
        match (email, timeline) {
            (true, true) => DraftChannel::Both,
            (true, false) => DraftChannel::Email,
            _ => DraftChannel::Timeline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DraftChannel::Email => "email",
            DraftChannel::Timeline => "timeline",
            DraftChannel::Both => "both",
        }
    }
}

impl fmt::Display for DraftChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DraftRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRequest {
    #[serde(rename = "type")]
    pub channel: DraftChannel,
    pub context: String,
    #[serde(default, rename = "emailSubject")]
    pub email_subject: Option<String>,
    #[serde(default, rename = "emailBody")]
    pub email_body: Option<String>,
    #[serde(default, rename = "timelineMessage")]
    pub timeline_message: Option<String>,
}

impl DraftRequest {
    pub fn new(channel: DraftChannel, context: impl Into<String>) -> Self {
        Self {
            channel,
            context: context.into(),
            email_subject: None,
            email_body: None,
            timeline_message: None,
        }
    }
}

// ---------------------------------------------------------------------------
// DraftResponse
// ---------------------------------------------------------------------------

/// All three fields, always — the service asks for and expects the full
/// set; trimming to the requested channel happens at the host boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResponse {
    #[serde(rename = "emailSubject")]
    pub email_subject: String,
    #[serde(rename = "emailBody")]
    pub email_body: String,
    #[serde(rename = "timelineMessage")]
    pub timeline_message: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_from_selection() {
        assert_eq!(DraftChannel::from_selection(true, true), DraftChannel::Both);
        assert_eq!(DraftChannel::from_selection(true, false), DraftChannel::Email);
        assert_eq!(
            DraftChannel::from_selection(false, true),
            DraftChannel::Timeline
        );
        assert_eq!(
            DraftChannel::from_selection(false, false),
            DraftChannel::Timeline
        );
    }

    #[test]
    fn request_serializes_with_wire_names() {
        let mut req = DraftRequest::new(DraftChannel::Both, "order shipped");
        req.email_subject = Some("Update".to_string());
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"type\":\"both\""));
        assert!(json.contains("\"emailSubject\":\"Update\""));
    }

    #[test]
    fn response_parses_wire_names() {
        let json = r#"{"emailSubject":"A","emailBody":"B","timelineMessage":"C"}"#;
        let resp: DraftResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.email_subject, "A");
        assert_eq!(resp.email_body, "B");
        assert_eq!(resp.timeline_message, "C");
    }
}

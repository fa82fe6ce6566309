//! Customer notification drafts: channel selection, sendability rules, and
//! the outbound payload handed to the host's send callback.

use crate::error::{Result, TracklineError};
use crate::types::NotificationChannel;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NotificationDraft
// ---------------------------------------------------------------------------

/// An in-progress notification. A timeline entry is always created; email
/// is opt-in, so the timeline channel can never be deselected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub message: String,
    #[serde(default)]
    pub email_subject: String,
    #[serde(default)]
    pub email_body: String,
    pub channels: Vec<NotificationChannel>,
}

impl Default for NotificationDraft {
    fn default() -> Self {
        Self {
            message: String::new(),
            email_subject: String::new(),
            email_body: String::new(),
            channels: vec![NotificationChannel::Timeline],
        }
    }
}

impl NotificationDraft {
    pub fn has_channel(&self, channel: NotificationChannel) -> bool {
        self.channels.contains(&channel)
    }

    /// Toggle a channel on or off. The timeline channel is pinned.
    pub fn toggle_channel(&mut self, channel: NotificationChannel) {
        if channel == NotificationChannel::Timeline {
            return;
        }
        if let Some(pos) = self.channels.iter().position(|c| *c == channel) {
            self.channels.remove(pos);
        } else {
            self.channels.push(channel);
        }
    }

    /// A draft is sendable when at least one channel is selected and the
    /// timeline message, if the timeline channel is on, is non-blank.
    pub fn is_sendable(&self) -> bool {
        !self.channels.is_empty()
            && !(self.has_channel(NotificationChannel::Timeline) && self.message.trim().is_empty())
    }

    /// Whether there is anything for the AI helper to work from.
    pub fn has_any_content(&self) -> bool {
        !self.message.trim().is_empty()
            || !self.email_subject.trim().is_empty()
            || !self.email_body.trim().is_empty()
    }

    /// Free-text context handed to the AI helper: every non-blank field,
    /// labeled, or a generic fallback when all are blank.
    pub fn ai_context(&self) -> String {
        let mut parts = Vec::new();
        if !self.email_subject.trim().is_empty() {
            parts.push(format!("Subject: {}", self.email_subject));
        }
        if !self.email_body.trim().is_empty() {
            parts.push(format!("Email Body: {}", self.email_body));
        }
        if !self.message.trim().is_empty() {
            parts.push(format!("Timeline: {}", self.message));
        }
        if parts.is_empty() {
            "order update".to_string()
        } else {
            parts.join("\n\n")
        }
    }

    /// The payload for the host's send callback. Email fields are trimmed
    /// away unless the email channel is selected.
    pub fn for_send(&self) -> Result<OutboundNotification> {
        if !self.is_sendable() {
            return Err(TracklineError::UnsendableDraft(
                "timeline message is empty".to_string(),
            ));
        }
        let email = self.has_channel(NotificationChannel::Email);
        Ok(OutboundNotification {
            message: self.message.clone(),
            email_subject: email.then(|| self.email_subject.clone()),
            email_body: email.then(|| self.email_body.clone()),
            channels: self.channels.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// OutboundNotification
// ---------------------------------------------------------------------------

/// What actually crosses the host boundary on send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundNotification {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
    pub channels: Vec<NotificationChannel>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

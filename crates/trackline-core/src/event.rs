use crate::acl::AclEntry;
use crate::template::{self, TemplateConfiguration};
use crate::timeline::StageRef;
use crate::user::UserRef;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Mention
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub id: u64,
    pub user: UserRef,
}

// ---------------------------------------------------------------------------
// TrackingEvent
// ---------------------------------------------------------------------------

/// One timeline entry — a system-generated status update or a user/staff
/// comment. Read-only projection of the server snapshot; display strings are
/// derived, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub id: u64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub template_configuration: Option<TemplateConfiguration>,
    #[serde(default)]
    pub causer: Option<UserRef>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default)]
    pub timeline_item: Option<StageRef>,
    #[serde(default)]
    pub children: Vec<TrackingEvent>,
    #[serde(default)]
    pub acls: Vec<AclEntry>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl TrackingEvent {
    /// An event is "edited" iff its timestamps differ.
    pub fn is_edited(&self) -> bool {
        self.created_at != self.updated_at
    }

    /// The label with template placeholders substituted, when a
    /// configuration is present.
    pub fn display_label(&self) -> Option<String> {
        let label = self.label.as_deref()?;
        Some(self.render(label))
    }

    /// The message with template placeholders substituted, when a
    /// configuration is present.
    pub fn display_message(&self) -> Option<String> {
        let message = self.message.as_deref()?;
        Some(self.render(message))
    }

    /// Display body: the message, falling back to the template
    /// configuration's `content` value, substituted either way. An empty
    /// message counts as absent for the fallback.
    pub fn content(&self) -> Option<String> {
        let raw = match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => self
                .template_configuration
                .as_ref()
                .and_then(|c| c.values.get("content"))?,
        };
        Some(self.render(raw))
    }

    fn render(&self, text: &str) -> String {
        match &self.template_configuration {
            Some(config) => template::substitute(text, &config.values),
            None => text.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Newest first. Stable, so events sharing a timestamp keep payload order.
pub fn sort_by_recency(events: &mut [TrackingEvent]) {
    events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

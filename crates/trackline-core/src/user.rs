use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserRef
// ---------------------------------------------------------------------------

/// A user as it appears inside tracking payloads: the comment author
/// ("causer"), a mentioned user, or a user-scoped ACL grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gravatar: Option<String>,
    #[serde(default)]
    pub shipping_mark: Option<String>,
    #[serde(default, rename = "type")]
    pub user_type: Option<String>,
}

impl UserRef {
    /// Display name with the email as a fallback for blank names.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

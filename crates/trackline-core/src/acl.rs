use crate::user::UserRef;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoleRef
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

// ---------------------------------------------------------------------------
// AclEntry
// ---------------------------------------------------------------------------

/// A visibility grant attached to an event, scoped either to a role or to a
/// single user. Discriminated by the payload's `acl_type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "acl_type", rename_all = "snake_case")]
pub enum AclEntry {
    Role {
        id: u64,
        #[serde(rename = "acl_value")]
        value: RoleRef,
    },
    User {
        id: u64,
        #[serde(rename = "acl_value")]
        value: UserRef,
    },
}

impl AclEntry {
    pub fn id(&self) -> u64 {
        match self {
            AclEntry::Role { id, .. } | AclEntry::User { id, .. } => *id,
        }
    }

    pub fn as_role(&self) -> Option<&RoleRef> {
        match self {
            AclEntry::Role { value, .. } => Some(value),
            AclEntry::User { .. } => None,
        }
    }

    pub fn as_user(&self) -> Option<&UserRef> {
        match self {
            AclEntry::User { value, .. } => Some(value),
            AclEntry::Role { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Collection helpers
// ---------------------------------------------------------------------------

/// Role-scoped grants, in payload order.
pub fn role_entries(entries: &[AclEntry]) -> impl Iterator<Item = &RoleRef> {
    entries.iter().filter_map(AclEntry::as_role)
}

/// User-scoped grants, in payload order.
pub fn user_entries(entries: &[AclEntry]) -> impl Iterator<Item = &UserRef> {
    entries.iter().filter_map(AclEntry::as_user)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

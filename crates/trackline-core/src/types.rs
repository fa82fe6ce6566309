use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VisibilityFilter
// ---------------------------------------------------------------------------

/// Which audience's view of the timeline is being rendered. Selects the
/// grouping mode: `Customer` groups by lifecycle stage, the others by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFilter {
    Staff,
    Customer,
    Public,
}

impl VisibilityFilter {
    pub fn all() -> &'static [VisibilityFilter] {
        &[
            VisibilityFilter::Staff,
            VisibilityFilter::Customer,
            VisibilityFilter::Public,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityFilter::Staff => "staff",
            VisibilityFilter::Customer => "customer",
            VisibilityFilter::Public => "public",
        }
    }

    pub fn is_customer(self) -> bool {
        matches!(self, VisibilityFilter::Customer)
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VisibilityFilter {
    type Err = crate::error::TracklineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(VisibilityFilter::Staff),
            "customer" => Ok(VisibilityFilter::Customer),
            "public" => Ok(VisibilityFilter::Public),
            _ => Err(crate::error::TracklineError::InvalidFilter(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// TrackPurpose
// ---------------------------------------------------------------------------

/// What a tracker tracks. Unknown tags are preserved rather than rejected so
/// new server-side purposes don't break old clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackPurpose {
    Purchase,
    Shipment,
    #[serde(untagged)]
    Other(String),
}

impl TrackPurpose {
    pub fn as_str(&self) -> &str {
        match self {
            TrackPurpose::Purchase => "purchase",
            TrackPurpose::Shipment => "shipment",
            TrackPurpose::Other(s) => s,
        }
    }
}

impl fmt::Display for TrackPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationChannel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Timeline,
    Email,
}

impl NotificationChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationChannel::Timeline => "timeline",
            NotificationChannel::Email => "email",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationChannel {
    type Err = crate::error::TracklineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeline" => Ok(NotificationChannel::Timeline),
            "email" => Ok(NotificationChannel::Email),
            _ => Err(crate::error::TracklineError::InvalidChannel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

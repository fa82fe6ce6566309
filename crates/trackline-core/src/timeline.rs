use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TimelineItem
// ---------------------------------------------------------------------------

/// A fixed, named stage in a purchase/shipment lifecycle (e.g. "Shipped").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: u64,
    pub label: String,
    pub identifier: String,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    pub display_order: i64,
    pub created_at: DateTime<FixedOffset>,
}

// ---------------------------------------------------------------------------
// StageRef
// ---------------------------------------------------------------------------

/// The light stage reference embedded on an event, identifying which
/// lifecycle stage the event belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRef {
    pub id: u64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub id: u64,
    #[serde(default)]
    pub timeline_items: Vec<TimelineItem>,
}

impl Timeline {
    /// Items in configured display order. Stable, so equal orders keep
    /// payload order.
    pub fn sorted_items(&self) -> Vec<&TimelineItem> {
        let mut items: Vec<&TimelineItem> = self.timeline_items.iter().collect();
        items.sort_by_key(|item| item.display_order);
        items
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::event::TrackingEvent;
use crate::timeline::Timeline;
use crate::types::TrackPurpose;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Server-provided aggregate describing all tracked activity for one
/// purchase/shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: u64,
    pub track_for: TrackPurpose,
    /// Customer-facing trackers carry a staged timeline; staff-only ones
    /// may not.
    #[serde(default)]
    pub timeline: Option<Timeline>,
    #[serde(default)]
    pub tracking_events: Vec<TrackingEvent>,
}

// ---------------------------------------------------------------------------
// TrackerSnapshot
// ---------------------------------------------------------------------------

/// The outermost payload. Old products predate activity tracking, so the
/// tracker itself is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    #[serde(default)]
    pub data: Option<Tracker>,
}

impl TrackerSnapshot {
    pub fn tracker(&self) -> Option<&Tracker> {
        self.data.as_ref()
    }

    pub fn events(&self) -> &[TrackingEvent] {
        self.data
            .as_ref()
            .map(|t| t.tracking_events.as_slice())
            .unwrap_or(&[])
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.data.as_ref().and_then(|t| t.timeline.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_no_events() {
        let snapshot: TrackerSnapshot = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(snapshot.tracker().is_none());
        assert!(snapshot.events().is_empty());
        assert!(snapshot.timeline().is_none());
    }

    #[test]
    fn full_payload_deserializes() {
        let json = r#"{
            "data": {
                "id": 44,
                "track_for": "purchase",
                "timeline": {
                    "id": 9,
                    "timeline_items": [{
                        "id": 1, "label": "Shipped", "identifier": "shipped",
                        "icon": "/icons/shipped.svg", "display_order": 1,
                        "created_at": "2026-01-01T00:00:00+00:00"
                    }]
                },
                "tracking_events": [{
                    "id": 100,
                    "label": "Order {status}",
                    "timeline_item": {"id": 1, "label": "Shipped"},
                    "created_at": "2026-03-01T10:00:00+06:00",
                    "updated_at": "2026-03-01T10:00:00+06:00"
                }]
            }
        }"#;
        let snapshot: TrackerSnapshot = serde_json::from_str(json).unwrap();
        let tracker = snapshot.tracker().unwrap();
        assert_eq!(tracker.track_for, TrackPurpose::Purchase);
        assert_eq!(snapshot.events().len(), 1);
        assert_eq!(snapshot.events()[0].timeline_item.as_ref().unwrap().id, 1);
        assert_eq!(snapshot.timeline().unwrap().timeline_items.len(), 1);
    }
}

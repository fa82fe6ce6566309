//! Event grouping for the two display modes: by lifecycle stage
//! (customer-facing view) and by calendar date (staff/public views).

use crate::event::TrackingEvent;
use crate::timeline::{Timeline, TimelineItem};
use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// EventGroup
// ---------------------------------------------------------------------------

/// One rendered group of events. The key is a timeline-item id (stage mode)
/// or an ISO calendar date (date mode), both as strings so expand/collapse
/// state can address either uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup<'a> {
    pub key: String,
    /// Set in stage mode; `None` for date buckets.
    pub stage: Option<&'a TimelineItem>,
    pub events: Vec<&'a TrackingEvent>,
}

impl EventGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

// ---------------------------------------------------------------------------
// Stage-grouped mode
// ---------------------------------------------------------------------------

/// One group per timeline item, in configured display order, holding the
/// events associated with that stage sorted newest first. Stages with no
/// events still produce (empty) groups; rendering filters them out.
pub fn group_by_stage<'a>(
    timeline: &'a Timeline,
    events: &'a [TrackingEvent],
) -> Vec<EventGroup<'a>> {
    timeline
        .sorted_items()
        .into_iter()
        .map(|item| {
            let mut matched: Vec<&TrackingEvent> = events
                .iter()
                .filter(|e| e.timeline_item.as_ref().map(|s| s.id) == Some(item.id))
                .collect();
            matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            EventGroup {
                key: item.id.to_string(),
                stage: Some(item),
                events: matched,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Date-grouped mode
// ---------------------------------------------------------------------------

/// All events sorted newest first, bucketed by calendar date. The date is
/// taken in the event's own UTC offset, not UTC, so a 23:30+06:00 event
/// lands on its local day. Bucket order follows the first event seen per
/// date, i.e. descending recency.
pub fn group_by_date(events: &[TrackingEvent]) -> Vec<EventGroup<'_>> {
    let mut sorted: Vec<&TrackingEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    // IndexMap keeps first-encountered bucket order, and merges a date that
    // reappears later (possible when events carry different UTC offsets).
    let mut buckets: IndexMap<String, Vec<&TrackingEvent>> = IndexMap::new();
    for event in sorted {
        let key = event.created_at.date_naive().format("%Y-%m-%d").to_string();
        buckets.entry(key).or_default().push(event);
    }

    buckets
        .into_iter()
        .map(|(key, events)| EventGroup {
            key,
            stage: None,
            events,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

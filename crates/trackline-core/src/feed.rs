//! Feed assembly: turn a tracker snapshot plus the active visibility filter
//! into the ordered groups a host renders, and classify each event as a
//! system entry or a user comment.

use crate::event::TrackingEvent;
use crate::grouping::{self, EventGroup};
use crate::tracker::TrackerSnapshot;
use crate::types::VisibilityFilter;

/// Messages carrying this prefix come from the deals extension and render as
/// system entries even without a label.
pub const EXTENSION_MARKER: &str = "[AI SMART DEALS]";

// ---------------------------------------------------------------------------
// FeedMode / Feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    /// Customer view: one group per lifecycle stage.
    Stage,
    /// Staff/public views: one bucket per calendar date.
    Date,
}

#[derive(Debug)]
pub struct Feed<'a> {
    pub mode: FeedMode,
    pub groups: Vec<EventGroup<'a>>,
}

impl Feed<'_> {
    /// Groups that actually render (empty stage groups are dropped here,
    /// not at grouping time).
    pub fn visible_groups(&self) -> impl Iterator<Item = &EventGroup<'_>> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(EventGroup::is_empty)
    }

    /// The bulk expand/collapse toggle only shows when more than one group
    /// has events.
    pub fn shows_bulk_toggle(&self) -> bool {
        self.visible_groups().count() > 1
    }
}

/// Select the grouping mode and build the feed. Stage grouping applies only
/// to the customer view of a tracker that actually carries a timeline;
/// everything else buckets by date.
pub fn build_feed<'a>(snapshot: &'a TrackerSnapshot, filter: VisibilityFilter) -> Feed<'a> {
    let events = snapshot.events();
    let feed = match snapshot.timeline() {
        Some(timeline) if filter.is_customer() => Feed {
            mode: FeedMode::Stage,
            groups: grouping::group_by_stage(timeline, events),
        },
        _ => Feed {
            mode: FeedMode::Date,
            groups: grouping::group_by_date(events),
        },
    };
    tracing::debug!(
        filter = %filter,
        mode = ?feed.mode,
        groups = feed.groups.len(),
        events = events.len(),
        "built timeline feed"
    );
    feed
}

// ---------------------------------------------------------------------------
// Event classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRole {
    /// Status update, extension message, or any customer-facing entry.
    System,
    /// A staff/customer comment (no label, authored by a person).
    User,
}

/// Which card an event renders as. Customer-facing views treat everything as
/// a system entry since those are automated notifications.
pub fn classify(event: &TrackingEvent, filter: VisibilityFilter) -> EventRole {
    let is_extension = event
        .display_message()
        .is_some_and(|m| m.starts_with(EXTENSION_MARKER));
    if event.label.is_some() || is_extension || filter.is_customer() {
        EventRole::System
    } else {
        EventRole::User
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{StageRef, Timeline, TimelineItem};
    use crate::tracker::Tracker;
    use crate::types::TrackPurpose;

    fn event(id: u64, created_at: &str) -> TrackingEvent {
        TrackingEvent {
            id,
            label: None,
            message: None,
            template: None,
            template_configuration: None,
            causer: None,
            display_order: 0,
            timeline_item: None,
            children: Vec::new(),
            acls: Vec::new(),
            mentions: Vec::new(),
            created_at: created_at.parse().unwrap(),
            updated_at: created_at.parse().unwrap(),
        }
    }

    fn snapshot(with_timeline: bool, events: Vec<TrackingEvent>) -> TrackerSnapshot {
        let timeline = with_timeline.then(|| Timeline {
            id: 1,
            timeline_items: vec![TimelineItem {
                id: 7,
                label: "Shipped".to_string(),
                identifier: "shipped".to_string(),
                description: None,
                icon: String::new(),
                display_order: 1,
                created_at: "2026-01-01T00:00:00+00:00".parse().unwrap(),
            }],
        });
        TrackerSnapshot {
            data: Some(Tracker {
                id: 1,
                track_for: TrackPurpose::Purchase,
                timeline,
                tracking_events: events,
            }),
        }
    }

    #[test]
    fn customer_view_with_timeline_groups_by_stage() {
        let mut e = event(1, "2026-03-01T10:00:00+06:00");
        e.timeline_item = Some(StageRef {
            id: 7,
            label: None,
            icon: None,
        });
        let snap = snapshot(true, vec![e]);
        let feed = build_feed(&snap, VisibilityFilter::Customer);
        assert_eq!(feed.mode, FeedMode::Stage);
        assert_eq!(feed.groups[0].key, "7");
        assert!(feed.groups[0].stage.is_some());
    }

    #[test]
    fn customer_view_without_timeline_falls_back_to_dates() {
        let snap = snapshot(false, vec![event(1, "2026-03-01T10:00:00+06:00")]);
        let feed = build_feed(&snap, VisibilityFilter::Customer);
        assert_eq!(feed.mode, FeedMode::Date);
    }

    #[test]
    fn staff_view_groups_by_date_even_with_timeline() {
        let snap = snapshot(true, vec![event(1, "2026-03-01T10:00:00+06:00")]);
        let feed = build_feed(&snap, VisibilityFilter::Staff);
        assert_eq!(feed.mode, FeedMode::Date);
        assert_eq!(feed.groups[0].key, "2026-03-01");
    }

    #[test]
    fn empty_snapshot_is_empty_feed() {
        let snap = TrackerSnapshot::default();
        let feed = build_feed(&snap, VisibilityFilter::Staff);
        assert!(feed.is_empty());
        assert!(!feed.shows_bulk_toggle());
    }

    #[test]
    fn visible_groups_drop_empty_stages() {
        let snap = snapshot(true, Vec::new());
        let feed = build_feed(&snap, VisibilityFilter::Customer);
        assert_eq!(feed.groups.len(), 1);
        assert_eq!(feed.visible_groups().count(), 0);
    }

    #[test]
    fn bulk_toggle_needs_two_nonempty_groups() {
        let snap = snapshot(
            false,
            vec![
                event(1, "2026-03-01T10:00:00+06:00"),
                event(2, "2026-03-02T10:00:00+06:00"),
            ],
        );
        let feed = build_feed(&snap, VisibilityFilter::Staff);
        assert!(feed.shows_bulk_toggle());
    }

    #[test]
    fn labeled_event_is_system() {
        let mut e = event(1, "2026-03-01T10:00:00+06:00");
        e.label = Some("Order placed".to_string());
        assert_eq!(classify(&e, VisibilityFilter::Staff), EventRole::System);
    }

    #[test]
    fn unlabeled_comment_is_user_in_staff_view() {
        let mut e = event(1, "2026-03-01T10:00:00+06:00");
        e.message = Some("<p>any update?</p>".to_string());
        assert_eq!(classify(&e, VisibilityFilter::Staff), EventRole::User);
    }

    #[test]
    fn extension_message_is_system() {
        let mut e = event(1, "2026-03-01T10:00:00+06:00");
        e.message = Some(format!("{EXTENSION_MARKER} price drop on tracked item"));
        assert_eq!(classify(&e, VisibilityFilter::Staff), EventRole::System);
    }

    #[test]
    fn customer_view_treats_everything_as_system() {
        let mut e = event(1, "2026-03-01T10:00:00+06:00");
        e.message = Some("<p>comment</p>".to_string());
        assert_eq!(classify(&e, VisibilityFilter::Customer), EventRole::System);
    }
}

//! The host-application boundary: how timeline data comes in and how user
//! actions (comment, edit, reply, notify) flow back out.

use crate::error::Result;
use crate::notify::OutboundNotification;
use crate::tracker::TrackerSnapshot;
use crate::types::VisibilityFilter;
use futures::future::BoxFuture;

// ---------------------------------------------------------------------------
// FetchState
// ---------------------------------------------------------------------------

/// Outcome of the host's read function for one (subject, filter) pair.
/// A failure renders as an inline notice; there is no automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Failed(String),
    Ready(TrackerSnapshot),
}

impl FetchState {
    pub fn snapshot(&self) -> Option<&TrackerSnapshot> {
        match self {
            FetchState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

// ---------------------------------------------------------------------------
// TimelineSource
// ---------------------------------------------------------------------------

/// Inbound data contract: the host supplies the read function; this crate
/// never fetches on its own.
pub trait TimelineSource {
    fn fetch(&self, subject_id: &str, filter: VisibilityFilter) -> FetchState;
}

// ---------------------------------------------------------------------------
// TimelineActions
// ---------------------------------------------------------------------------

/// Outbound callbacks. Boxed futures keep the trait object-safe so hosts can
/// hand over a `dyn TimelineActions`. Implementations wrap their transport
/// failures in [`crate::TracklineError::Submission`].
pub trait TimelineActions {
    fn add_comment(&self, html: String) -> BoxFuture<'_, Result<()>>;
    fn edit(&self, event_id: u64, content: String) -> BoxFuture<'_, Result<()>>;
    fn delete(&self, event_id: u64) -> BoxFuture<'_, Result<()>>;
    fn reply(&self, event_id: u64, content: String) -> BoxFuture<'_, Result<()>>;
    fn send_notification(&self, notification: OutboundNotification) -> BoxFuture<'_, Result<()>>;
}

// ---------------------------------------------------------------------------
// SubmissionGate
// ---------------------------------------------------------------------------

/// One boolean in-flight flag per asynchronous operation (comment,
/// notification, AI draft). Gates re-submission only: no queueing, no
/// cancellation, no timeout beyond the transport's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionGate {
    in_flight: bool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns `false` while a request is outstanding.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the gate once the request settles, success or failure.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn gate_blocks_while_in_flight() {
        let mut gate = SubmissionGate::new();
        assert!(gate.begin());
        assert!(gate.is_in_flight());
        assert!(!gate.begin());
        gate.finish();
        assert!(gate.begin());
    }

    #[test]
    fn fetch_state_accessors() {
        assert!(FetchState::Loading.is_loading());
        assert!(FetchState::Loading.snapshot().is_none());
        assert!(FetchState::Failed("boom".to_string()).snapshot().is_none());
        let ready = FetchState::Ready(TrackerSnapshot::default());
        assert!(ready.snapshot().is_some());
    }

    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl TimelineActions for Recorder {
        fn add_comment(&self, html: String) -> BoxFuture<'_, Result<()>> {
            Box::pin(async move {
                self.calls.lock().unwrap().push(format!("comment:{html}"));
                Ok(())
            })
        }

        fn edit(&self, event_id: u64, content: String) -> BoxFuture<'_, Result<()>> {
            Box::pin(async move {
                self.calls
                    .lock()
                    .unwrap()
                    .push(format!("edit:{event_id}:{content}"));
                Ok(())
            })
        }

        fn delete(&self, event_id: u64) -> BoxFuture<'_, Result<()>> {
            Box::pin(async move {
                self.calls.lock().unwrap().push(format!("delete:{event_id}"));
                Ok(())
            })
        }

        fn reply(&self, event_id: u64, content: String) -> BoxFuture<'_, Result<()>> {
            Box::pin(async move {
                self.calls
                    .lock()
                    .unwrap()
                    .push(format!("reply:{event_id}:{content}"));
                Ok(())
            })
        }

        fn send_notification(
            &self,
            notification: OutboundNotification,
        ) -> BoxFuture<'_, Result<()>> {
            Box::pin(async move {
                self.calls
                    .lock()
                    .unwrap()
                    .push(format!("notify:{}", notification.message));
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn actions_trait_is_object_safe() {
        let recorder = Recorder {
            calls: Mutex::new(Vec::new()),
        };
        let actions: &dyn TimelineActions = &recorder;
        actions.add_comment("<p>hi</p>".to_string()).await.unwrap();
        actions.reply(9, "sure".to_string()).await.unwrap();
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), ["comment:<p>hi</p>", "reply:9:sure"]);
    }
}

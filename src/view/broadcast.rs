// src/view/broadcast.rs

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::run::RunSnapshot;

/// Publish/subscribe channel carrying the latest snapshot of the currently
/// viewed run.
///
/// Backed by a `watch` channel: subscribers always observe the most recent
/// value (overwritten, not accumulated). The polling layer that refreshes
/// run state publishes here; the synchronizer subscribes, and republishes
/// after a successful stop action.
#[derive(Debug, Clone)]
pub struct RunBroadcaster {
    tx: Arc<watch::Sender<Option<RunSnapshot>>>,
}

impl RunBroadcaster {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to snapshot updates. Dropping the receiver releases the
    /// subscription.
    pub fn subscribe(&self) -> watch::Receiver<Option<RunSnapshot>> {
        self.tx.subscribe()
    }

    /// Replace the current snapshot and notify all subscribers.
    pub fn publish(&self, snapshot: RunSnapshot) {
        debug!(status = ?snapshot.status, "publishing run snapshot");
        // Send only fails with no receivers; the value is still stored for
        // late subscribers, so the result is intentionally ignored.
        let _ = self.tx.send_replace(Some(snapshot));
    }

    /// The most recently published snapshot, if any.
    pub fn latest(&self) -> Option<RunSnapshot> {
        self.tx.borrow().clone()
    }
}

impl Default for RunBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

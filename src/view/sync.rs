// src/view/sync.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use crate::graph::Workflow;
use crate::run::{DurationFormatter, RunSnapshot, Selection};
use crate::view::state::{ViewState, derive_view_state};

/// Clock used when recomputing an active node-run's duration. Injectable so
/// tests can pin "now" and assert identical recomputation.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Keeps the derived [`ViewState`] consistent as two independent streams
/// emit: the navigation selection and the run-snapshot broadcast.
///
/// Each emission is handled to completion before the next is processed;
/// ordering between the two streams is not guaranteed relative to each
/// other, but each stream's own order is preserved. The loop exits when
/// either input stream closes, which is how the owning view tears the
/// synchronizer down: drop the senders and both subscriptions are released.
pub struct ViewSynchronizer<F> {
    editable_workflow: Workflow,
    selection_rx: watch::Receiver<Selection>,
    snapshot_rx: watch::Receiver<Option<RunSnapshot>>,
    state_tx: watch::Sender<ViewState>,
    formatter: F,
    clock: Clock,
}

impl<F: DurationFormatter> ViewSynchronizer<F> {
    /// Wire up a synchronizer.
    ///
    /// - `editable_workflow` is the currently editable definition, which may
    ///   differ from the workflow embedded in run snapshots.
    /// - `selection_rx` carries the navigation addressing triple.
    /// - `snapshot_rx` is a [`RunBroadcaster`](crate::view::RunBroadcaster)
    ///   subscription.
    ///
    /// Returns the synchronizer and the receiver consumers watch for
    /// derived-state updates.
    pub fn new(
        editable_workflow: Workflow,
        selection_rx: watch::Receiver<Selection>,
        snapshot_rx: watch::Receiver<Option<RunSnapshot>>,
        formatter: F,
    ) -> (Self, watch::Receiver<ViewState>) {
        let (state_tx, state_rx) = watch::channel(ViewState::default());
        let sync = Self {
            editable_workflow,
            selection_rx,
            snapshot_rx,
            state_tx,
            formatter,
            clock: Arc::new(Utc::now),
        };
        (sync, state_rx)
    }

    /// Replace the wall clock. Test seam.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Run the recompute loop until either input stream closes.
    pub async fn run(mut self) {
        // Publish an initial state from whatever both streams already hold,
        // then react to changes.
        self.recompute();

        loop {
            tokio::select! {
                changed = self.selection_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.recompute();
                }
                changed = self.snapshot_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.recompute();
                }
            }
        }

        debug!("input stream closed; view synchronizer stopping");
    }

    /// Recompute the derived state from the latest value of each stream.
    /// Idempotent for a fixed clock.
    fn recompute(&mut self) {
        let selection = self.selection_rx.borrow_and_update().clone();
        let snapshot = self.snapshot_rx.borrow_and_update().clone();
        let now = (self.clock)();

        let state = derive_view_state(
            &self.editable_workflow,
            &selection,
            snapshot.as_ref(),
            now,
            &self.formatter,
        );

        debug!(
            loaded = state.loaded,
            can_be_run = state.can_be_run,
            "derived view state recomputed"
        );
        let _ = self.state_tx.send(state);
    }
}

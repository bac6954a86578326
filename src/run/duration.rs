// src/run/duration.rs

use chrono::{DateTime, Utc};

use crate::run::snapshot::NodeRun;

/// Renders a `(start, end)` pair as a human-readable duration.
///
/// Formatting is owned by the embedder; this crate only picks the correct
/// end instant. Any `Fn(DateTime<Utc>, DateTime<Utc>) -> String` closure
/// implements the trait.
pub trait DurationFormatter {
    fn format(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String;
}

impl<F> DurationFormatter for F
where
    F: Fn(DateTime<Utc>, DateTime<Utc>) -> String,
{
    fn format(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        self(start, end)
    }
}

/// Elapsed time of a node-run, or `None` when there is nothing to show.
///
/// For an active record the end instant is `now` (the duration keeps
/// growing); for a terminal record it is the recorded `done` instant. A
/// terminal record with no `done` yet yields `None` rather than guessing.
pub fn duration_of(
    node_run: Option<&NodeRun>,
    now: DateTime<Utc>,
    fmt: &impl DurationFormatter,
) -> Option<String> {
    let node_run = node_run?;
    let end = if node_run.status.is_active() {
        now
    } else {
        node_run.done?
    };
    Some(fmt.format(node_run.start, end))
}

// src/view/state.rs

use chrono::{DateTime, Utc};

use crate::graph::{Node, Workflow};
use crate::run::{DurationFormatter, NodeRun, RunSnapshot, Selection, can_be_run, duration_of};

/// The derived state consumers render from.
///
/// `loaded` is `false` until the first run snapshot has been received; all
/// other fields are empty/false in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The node in focus, resolved from the run's embedded workflow.
    pub node: Option<Node>,
    /// The node-run matching the selection's `(run_id, num)`, if any.
    pub node_run: Option<NodeRun>,
    /// Formatted elapsed time of `node_run`.
    pub duration: Option<String>,
    /// Whether the focused node may currently be (re)triggered.
    pub can_be_run: bool,
    /// Whether the focused node still exists in the editable definition.
    pub can_edit: bool,
    pub loaded: bool,
}

/// Recompute the derived state from the latest value of each input.
///
/// Pure and idempotent: the same `(selection, snapshot, now)` triple always
/// yields an identical [`ViewState`].
///
/// The focused node is resolved against the snapshot's *embedded* workflow
/// (what actually ran), while eligibility and editability consult the
/// *editable* definition, which may have diverged since the run started.
pub fn derive_view_state(
    editable_workflow: &Workflow,
    selection: &Selection,
    snapshot: Option<&RunSnapshot>,
    now: DateTime<Utc>,
    fmt: &impl DurationFormatter,
) -> ViewState {
    let Some(snapshot) = snapshot else {
        // No snapshot received yet; leave the state as "not yet loaded".
        return ViewState::default();
    };

    let node = selection
        .node_id
        .and_then(|id| snapshot.workflow.node(id))
        .cloned();

    let node_run = match (&node, selection.run_id, selection.run_number) {
        (Some(node), Some(run_id), Some(num)) => {
            snapshot.find_node_run(node.id, run_id, num).cloned()
        }
        _ => None,
    };

    let duration = duration_of(node_run.as_ref(), now, fmt);

    let can_run = selection
        .node_id
        .is_some_and(|id| can_be_run(editable_workflow, snapshot, id, selection));

    let can_edit = selection
        .node_id
        .is_some_and(|id| editable_workflow.node(id).is_some());

    ViewState {
        node,
        node_run,
        duration,
        can_be_run: can_run,
        can_edit,
        loaded: true,
    }
}

// src/run/snapshot.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, Workflow};
use crate::run::status::PipelineStatus;

/// One concrete execution of a node within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRun {
    pub id: i64,
    /// Run number, disambiguating among multiple triggers of the same run.
    pub num: i64,
    /// Back-reference to the workflow node this record executed. The node
    /// may since have been removed from the current definition.
    pub workflow_node_id: NodeId,
    pub status: PipelineStatus,
    pub start: DateTime<Utc>,
    /// Set once the record is terminal; `None` while still executing.
    pub done: Option<DateTime<Utc>>,
    /// Eligibility as computed by the server when it produced this record.
    /// Authoritative: consumers must not second-guess it.
    pub can_be_run: bool,
}

/// A point-in-time snapshot of one run of a workflow.
///
/// Snapshots are owned and replaced atomically on every update; nothing in
/// this crate mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    /// Overall run status.
    pub status: PipelineStatus,
    /// The definition as it was when the run started. May differ from the
    /// currently editable definition after a post-start edit.
    pub workflow: Workflow,
    /// Node id -> executed node-runs, in execution order. A node appears
    /// more than once in its sequence when it was retried.
    pub nodes: HashMap<NodeId, Vec<NodeRun>>,
}

impl RunSnapshot {
    /// Node-runs recorded for `id`, empty when the node never executed.
    pub fn node_runs(&self, id: NodeId) -> &[NodeRun] {
        self.nodes.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Locate the node-run under `node` matching the `(id, num)` pair.
    /// "No match" is an expected outcome, not an error.
    pub fn find_node_run(&self, node: NodeId, run_id: i64, num: i64) -> Option<&NodeRun> {
        self.node_runs(node)
            .iter()
            .find(|r| r.id == run_id && r.num == num)
    }
}

/// The addressing triple identifying which node-run, if any, is in focus.
///
/// All fields are optional: the triple is parsed from navigation/URL state
/// and any part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub node_id: Option<NodeId>,
    pub run_id: Option<i64>,
    pub run_number: Option<i64>,
}

impl Selection {
    /// Sentinel run id the navigation layer uses when no concrete node-run
    /// is addressed (summary view).
    pub const SUMMARY_RUN_ID: i64 = -1;

    pub fn is_summary(&self) -> bool {
        self.run_id == Some(Self::SUMMARY_RUN_ID)
    }
}

// src/lib.rs

//! Run-eligibility core for viewing one run of a workflow DAG.
//!
//! Given a workflow definition, a point-in-time snapshot of a run's executed
//! node-runs, and the identity of one node, this crate answers two questions:
//!
//! - "can this node be (re)triggered right now?" ([`can_be_run`])
//! - "how long has its run taken so far?" ([`duration_of`])
//!
//! On top of the pure decision functions, [`ViewSynchronizer`] keeps a derived
//! view state consistent as two independent streams (navigation selection,
//! run-snapshot broadcasts) emit.
//!
//! The crate computes nothing itself: DAG construction, run persistence and
//! scheduling all live elsewhere and hand their data in.

pub mod errors;
pub mod graph;
pub mod run;
pub mod view;

pub use crate::graph::{Node, NodeId, Workflow};
pub use crate::run::{
    DurationFormatter, NodeRun, PipelineStatus, RunSnapshot, Selection, can_be_run, duration_of,
};
pub use crate::view::{
    RunBroadcaster, RunQueryService, ViewState, ViewSynchronizer, derive_view_state,
    stop_node_run,
};

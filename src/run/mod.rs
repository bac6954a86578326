// src/run/mod.rs

//! Run-time data model and the pure decision functions over it.
//!
//! - [`status`] classifies a pipeline status as active or terminal.
//! - [`snapshot`] holds the per-run execution records and the addressing
//!   triple used to focus on one of them.
//! - [`eligibility`] decides whether a node may be (re)triggered right now.
//! - [`duration`] picks the correct end instant for a node-run's elapsed
//!   time and delegates formatting.

pub mod duration;
pub mod eligibility;
pub mod snapshot;
pub mod status;

pub use duration::{DurationFormatter, duration_of};
pub use eligibility::can_be_run;
pub use snapshot::{NodeRun, RunSnapshot, Selection};
pub use status::PipelineStatus;

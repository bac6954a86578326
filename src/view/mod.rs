// src/view/mod.rs

//! Derived view state and the reactive synchronizer that keeps it current.
//!
//! Two independent streams drive recomputation:
//! - the navigation [`Selection`](crate::run::Selection) stream, and
//! - the shared run-snapshot broadcast.
//!
//! Each emission is handled to completion on a single task; the derived
//! state is republished through a `watch` channel for consumers.

pub mod broadcast;
pub mod service;
pub mod state;
pub mod sync;

pub use broadcast::RunBroadcaster;
pub use service::{RunQueryService, stop_node_run};
pub use state::{ViewState, derive_view_state};
pub use sync::{Clock, ViewSynchronizer};

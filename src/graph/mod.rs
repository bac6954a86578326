// src/graph/mod.rs

//! Workflow DAG definition and pure lookups.
//!
//! The graph is never computed here; it arrives fully formed from whatever
//! editor/loader owns the definition and is replaced wholesale on edit.

pub mod workflow;

pub use workflow::{Node, NodeId, Workflow};

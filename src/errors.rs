// src/errors.rs

//! Crate-wide error aliases.
//!
//! The core itself has no fallible operations: missing nodes, absent run
//! records and not-yet-loaded snapshots are all expected steady states and
//! surface as `Option`/empty values. The one fallible seam is the delegated
//! stop-run call, whose error passes through unmodified.

pub use anyhow::{Error, Result};

//! Librarian: track a working set of files, tag them, and compare their content
//!
//! - `areas`: catalog persistence, workspace access and the repository facade
//! - `artifacts`: file records, the bidirectional line matcher and status types
//! - `commands`: command implementations driven by the binary
//! - `errors`: typed errors raised by file records
//! - `logging`: `tracing` subscriber setup

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod logging;

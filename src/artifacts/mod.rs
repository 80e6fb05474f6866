//! Data structures and algorithms
//!
//! - `record`: tracked file records, their caches and persisted shape
//! - `compare`: bidirectional line matching and comparison results
//! - `status`: working-set status summary

pub mod compare;
pub mod record;
pub mod status;

//! Stateful building blocks
//!
//! - `catalog`: the persisted working set of tracked files
//! - `repository`: ties the root, output writer, workspace and catalog together
//! - `workspace`: filesystem listing and path resolution under the root

pub mod catalog;
pub mod repository;
pub mod workspace;

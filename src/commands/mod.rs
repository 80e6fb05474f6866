//! Command implementations
//!
//! Each command is an `impl Repository` block that loads the catalog, acts
//! on it, prints its result to the repository writer, and persists the
//! catalog when it changed.

pub mod porcelain;

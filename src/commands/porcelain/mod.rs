//! User-facing commands
//!
//! ## Commands
//!
//! - `add`: Track files (directories expand recursively)
//! - `tag`: Tag tracked files
//! - `list`: List tracked files, optionally filtered and sorted
//! - `compare`: Compare the content of two tracked files
//! - `size`: Report a tracked file's size
//! - `status`: Summarize the working set

pub mod add;
pub mod compare;
pub mod list;
pub mod size;
pub mod status;
pub mod tag;

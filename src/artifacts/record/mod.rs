//! Tracked file records
//!
//! - `file_record`: a tracked file with cached size, content, tags and comparisons
//! - `content`: lazy content state and the disk readers behind it
//! - `size_unit`: units a size can be reported in
//! - `save_data`: the persisted shape of a record
//! - `filter`: tag/name/content criteria for selecting records

pub mod content;
pub mod file_record;
pub mod filter;
pub mod save_data;
pub mod size_unit;

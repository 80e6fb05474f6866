//! Line-based content comparison
//!
//! - `line_matcher`: bidirectional scan bounding the region where two files diverge
//! - `compare_result`: structured comparison outcome and its text summary
//!
//! This is deliberately not a diff engine: it reports where the first
//! mismatch sits from each end, not how to turn one file into the other.

pub mod compare_result;
pub mod line_matcher;

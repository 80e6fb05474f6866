//! Working-set status reporting

pub mod status_info;

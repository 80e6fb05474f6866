use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted shape of a file record
///
/// Size is not part of the format: it is re-read from the live
/// filesystem the first time it is needed after a restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub path: PathBuf,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: Option<Vec<String>>,
}

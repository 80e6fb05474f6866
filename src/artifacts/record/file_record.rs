use crate::artifacts::compare::compare_result::CompareResult;
use crate::artifacts::record::content::{self, ContentState};
use crate::artifacts::record::save_data::SaveData;
use crate::artifacts::record::size_unit::SizeUnit;
use crate::errors::{RecordError, RecordResult};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// A tracked file
///
/// Content and size are read lazily from disk and cached for the lifetime
/// of the record. The record also remembers the last comparison made
/// against every peer, keyed by the peer's path.
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: PathBuf,
    size: Option<u64>,
    tags: Vec<String>,
    content: ContentState,
    compare_results: BTreeMap<PathBuf, CompareResult>,
    last_sort_position: usize,
}

impl FileRecord {
    /// Create a record for `path`, resolved against the current directory
    ///
    /// The file does not have to exist yet; nothing is read until needed.
    /// The record is keyed by [`identity_path`] of the resolved path.
    pub fn open(path: impl AsRef<Path>) -> RecordResult<Self> {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|err| RecordError::InvalidPath {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        Ok(FileRecord {
            path: identity_path(&path),
            size: None,
            tags: Vec::new(),
            content: ContentState::NotLoaded,
            compare_results: BTreeMap::new(),
            last_sort_position: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.path.parent()
    }

    // ========== Size ==========

    /// Raw size in bytes, read from the filesystem on first use
    pub fn byte_len(&mut self) -> RecordResult<u64> {
        if let Some(size) = self.size {
            return Ok(size);
        }

        let size = content::byte_len(&self.path)?;
        self.size = Some(size);

        Ok(size)
    }

    pub fn cached_byte_len(&self) -> Option<u64> {
        self.size
    }

    /// Size converted to `unit`; the cached byte count is never rescaled
    pub fn size_in(&mut self, unit: SizeUnit) -> RecordResult<f64> {
        Ok(unit.scale(self.byte_len()?))
    }

    // ========== Tagging ==========

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns `false` if the tag was already present
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }

        self.tags.push(tag);
        true
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    // ========== Filtering ==========

    pub fn matches_filename(&self, substring: &str, ignore_case: bool) -> bool {
        contains(&self.file_name(), substring, ignore_case)
    }

    pub fn content_contains(&mut self, substring: &str, ignore_case: bool) -> RecordResult<bool> {
        let needle = if ignore_case {
            substring.to_lowercase()
        } else {
            substring.to_string()
        };

        Ok(self
            .content()?
            .iter()
            .any(|line| contains(line, &needle, ignore_case)))
    }

    // ========== Content ==========

    /// File lines, loaded from disk on first use
    ///
    /// A load that failed is not retried; the same error is returned again.
    pub fn content(&mut self) -> RecordResult<&[String]> {
        if let ContentState::NotLoaded = self.content {
            debug!(path = %self.path.display(), "loading file content");

            self.content = match content::read_lines(&self.path) {
                Ok(lines) => ContentState::Loaded(lines),
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "failed to load file content");
                    ContentState::Failed(err)
                }
            };
        }

        if let ContentState::Failed(err) = &self.content {
            return Err(err.clone());
        }

        Ok(self.content.lines().unwrap_or_default())
    }

    pub fn cached_content(&self) -> Option<&[String]> {
        self.content.lines()
    }

    // ========== Comparing ==========

    /// Compare this file's lines against `other`'s and return a summary
    ///
    /// The structured result is kept under `other`'s path, replacing any
    /// earlier comparison against the same peer. Nothing is stored on `other`.
    pub fn compare_with(
        &mut self,
        other: &mut FileRecord,
        ignore_empty_lines: bool,
    ) -> RecordResult<String> {
        self.content()?;
        other.content()?;

        let this_size = self.byte_len()?;
        let other_size = other.byte_len()?;

        let result = CompareResult::compute(
            this_size,
            other_size,
            self.content.lines().unwrap_or_default(),
            other.content.lines().unwrap_or_default(),
            ignore_empty_lines,
        );
        let summary = result.summary();

        debug!(
            this = %self.path.display(),
            other = %other.path.display(),
            outcome = ?result.outcome(),
            "compared files"
        );
        self.compare_results.insert(other.path.clone(), result);

        Ok(summary)
    }

    pub fn last_compare_result(&self, other: &Path) -> Option<&CompareResult> {
        self.compare_results.get(other)
    }

    pub fn compare_results(&self) -> impl Iterator<Item = (&Path, &CompareResult)> {
        self.compare_results
            .iter()
            .map(|(path, result)| (path.as_path(), result))
    }

    // ========== Ordering ==========

    pub fn last_sort_position(&self) -> usize {
        self.last_sort_position
    }

    pub fn set_last_sort_position(&mut self, position: usize) {
        self.last_sort_position = position;
    }

    // ========== Save/Load ==========

    pub fn to_save_data(&self) -> SaveData {
        SaveData {
            path: self.path.clone(),
            tags: self.tags.clone(),
            content: self.cached_content().map(<[String]>::to_vec),
        }
    }
}

impl TryFrom<SaveData> for FileRecord {
    type Error = RecordError;

    fn try_from(save_data: SaveData) -> Result<Self, Self::Error> {
        if save_data.path.as_os_str().is_empty() {
            return Err(RecordError::MalformedSaveData(
                "record has no path".to_string(),
            ));
        }

        let mut record = FileRecord::open(&save_data.path)?;
        record.tags = save_data.tags;
        record.content = save_data.content.into();

        Ok(record)
    }
}

/// Key a file is tracked under
///
/// Existing files are keyed by their canonical path, so `..` segments and
/// symlinks name the same record. Missing files fall back to folding `.` and
/// `..` lexically. `path` must be absolute.
pub fn identity_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| fold_lexically(path))
}

fn fold_lexically(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other.as_os_str()),
        }
    }
    folded
}

fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if ignore_case {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    } else {
        haystack.contains(needle)
    }
}

//! Catalog of tracked files
//!
//! The catalog is the working set: an ordered list of file records that is
//! persisted as JSON between runs. Each record is stored in its save-data
//! shape (path, tags, cached content), so content read by one command is
//! reused by the next one without touching the file again.
//!
//! ## File Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "files": [
//!     { "path": "/abs/path.txt", "tags": ["a"], "content": ["line", ...] | null }
//!   ]
//! }
//! ```

use crate::artifacts::record::file_record::FileRecord;
use crate::artifacts::record::filter::RecordFilter;
use crate::artifacts::record::save_data::SaveData;
use crate::artifacts::status::status_info::StatusInfo;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;
use tracing::{debug, info};

/// Catalog file format version
pub const VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: u32,
    files: Vec<SaveData>,
}

/// Order the working set can be sorted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
}

#[derive(Debug)]
pub struct Catalog {
    /// Path to the catalog file
    path: Box<Path>,
    records: Vec<FileRecord>,
    /// Set when the catalog differs from what is on disk
    changed: bool,
}

impl Catalog {
    pub fn new(path: Box<Path>) -> Self {
        Catalog {
            path,
            records: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    fn clear(&mut self) {
        self.records.clear();
        self.changed = false;
    }

    /// Load the catalog from disk
    ///
    /// A missing or empty catalog file yields an empty catalog.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the catalog file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path().exists() {
            return Ok(());
        }

        let mut catalog_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut catalog_file, file_guard::Lock::Shared, 0, 1)?;

        let mut raw = String::new();
        lock.deref_mut().read_to_string(&mut raw)?;

        if raw.trim().is_empty() {
            return Ok(());
        }

        let catalog: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed catalog file: {}", self.path().display()))?;

        if catalog.version != VERSION {
            anyhow::bail!("Unsupported catalog version: {}", catalog.version);
        }

        self.records = catalog
            .files
            .into_iter()
            .map(FileRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Malformed catalog file: {}", self.path().display()))?;

        debug!(path = %self.path().display(), files = self.records.len(), "loaded catalog");

        Ok(())
    }

    /// Persist the catalog, taking an exclusive lock on the file
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if let Some(parent) = self.path().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let catalog = CatalogFile {
            version: VERSION,
            files: self.records.iter().map(FileRecord::to_save_data).collect(),
        };
        let data = serde_json::to_string_pretty(&catalog)?;

        let mut catalog_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut catalog_file, file_guard::Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(data.as_bytes())?;

        self.changed = false;
        info!(path = %self.path().display(), files = self.records.len(), "wrote catalog");

        Ok(())
    }

    pub fn position(&self, path: &Path) -> Option<usize> {
        self.records.iter().position(|record| record.path() == path)
    }

    pub fn record(&self, path: &Path) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.path() == path)
    }

    pub fn record_mut(&mut self, path: &Path) -> Option<&mut FileRecord> {
        self.records.iter_mut().find(|record| record.path() == path)
    }

    /// Track a new file; returns `false` if its path is already tracked
    pub fn add(&mut self, record: FileRecord) -> bool {
        if self.position(record.path()).is_some() {
            return false;
        }

        self.records.push(record);
        self.changed = true;
        true
    }

    pub fn add_tag(&mut self, path: &Path, tag: &str) -> anyhow::Result<bool> {
        let record = self
            .record_mut(path)
            .ok_or_else(|| anyhow::anyhow!("File '{}' is not tracked", path.display()))?;

        let added = record.add_tag(tag);
        self.changed |= added;

        Ok(added)
    }

    /// Compare the record at `this` against the record at `other`
    pub fn compare(
        &mut self,
        this: &Path,
        other: &Path,
        ignore_empty_lines: bool,
    ) -> anyhow::Result<String> {
        let this_idx = self
            .position(this)
            .ok_or_else(|| anyhow::anyhow!("File '{}' is not tracked", this.display()))?;
        let other_idx = self
            .position(other)
            .ok_or_else(|| anyhow::anyhow!("File '{}' is not tracked", other.display()))?;

        if this_idx == other_idx {
            anyhow::bail!("Cannot compare '{}' with itself", this.display());
        }

        let (this_record, other_record) = self.pair_mut(this_idx, other_idx);
        let (this_loaded, other_loaded) = (
            this_record.cached_content().is_some(),
            other_record.cached_content().is_some(),
        );

        let result = this_record.compare_with(other_record, ignore_empty_lines);

        // content loaded by the comparison is worth persisting
        self.changed |= this_loaded != self.records[this_idx].cached_content().is_some()
            || other_loaded != self.records[other_idx].cached_content().is_some();

        Ok(result?)
    }

    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut FileRecord, &mut FileRecord) {
        if a < b {
            let (left, right) = self.records.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.records.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    /// Records matching `filter`, in catalog order
    pub fn filter(&mut self, filter: &RecordFilter) -> anyhow::Result<Vec<&FileRecord>> {
        let mut matched = Vec::new();
        for (idx, record) in self.records.iter_mut().enumerate() {
            let was_loaded = record.cached_content().is_some();

            if filter.matches(record)? {
                matched.push(idx);
            }

            self.changed |= was_loaded != record.cached_content().is_some();
        }

        Ok(matched.into_iter().map(|idx| &self.records[idx]).collect())
    }

    /// Reorder the working set and record each file's new position
    pub fn sort_by(&mut self, key: SortKey) -> anyhow::Result<()> {
        if key == SortKey::Size {
            for record in self.records.iter_mut() {
                record.byte_len()?;
            }
        }

        match key {
            SortKey::Name => self.records.sort_by(|a, b| {
                a.file_name()
                    .cmp(&b.file_name())
                    .then_with(|| a.path().cmp(b.path()))
            }),
            SortKey::Size => self.records.sort_by_key(|record| record.cached_byte_len()),
        }

        for (position, record) in self.records.iter_mut().enumerate() {
            record.set_last_sort_position(position);
        }
        self.changed = true;

        Ok(())
    }

    pub fn status(&self) -> StatusInfo {
        StatusInfo::collect(&self.records)
    }
}

use crate::artifacts::record::file_record::identity_path;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

/// Working directory the user's paths are resolved against
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a user supplied path against the workspace root to the key
    /// its record is tracked under
    pub fn resolve(&self, path: &Path) -> PathBuf {
        identity_path(&self.path.join(path))
    }

    /// Display form of `path`: relative to the root when it lives below it
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(self.path.as_ref()).unwrap_or(path)
    }

    /// Expand `path` into the files it denotes
    ///
    /// Directories are walked recursively; `skip` names files (such as the
    /// catalog itself) that must never be tracked. Ignored or skipped files
    /// are left out even when named directly.
    pub fn list_files(&self, path: &Path, skip: &[&Path]) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = self.resolve(path);

        if !root_file_path.exists() {
            anyhow::bail!(
                "The specified path does not exist: {}",
                root_file_path.display()
            );
        }

        if root_file_path.is_dir() {
            Ok(WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        warn!(error = %err, "skipping unreadable directory entry");
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|path| !self.is_excluded(path, skip))
                .collect())
        } else if self.is_excluded(&root_file_path, skip) {
            warn!(path = %root_file_path.display(), "refusing to track ignored file");
            Ok(Vec::new())
        } else {
            Ok(vec![root_file_path])
        }
    }

    fn is_excluded(&self, path: &Path, skip: &[&Path]) -> bool {
        self.is_ignored(path) || skip.contains(&path)
    }

    /// Only the part of `path` below the root is checked
    fn is_ignored(&self, path: &Path) -> bool {
        self.relative(path).components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }
}

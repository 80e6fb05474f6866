use crate::artifacts::record::file_record::FileRecord;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

/// Summary of the working set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub file_count: usize,
    pub directory_count: usize,
}

impl StatusInfo {
    pub fn collect<'r>(records: impl IntoIterator<Item = &'r FileRecord>) -> Self {
        let mut file_count = 0;
        let mut directories = BTreeSet::<&Path>::new();

        for record in records {
            file_count += 1;
            if let Some(dir) = record.directory() {
                directories.insert(dir);
            }
        }

        StatusInfo {
            file_count,
            directory_count: directories.len(),
        }
    }
}

impl Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current list contains '{}' files in '{}' directories.",
            self.file_count, self.directory_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_parent_directories() {
        let records = ["/lib/a.txt", "/lib/b.txt", "/lib/sub/c.txt"]
            .into_iter()
            .map(|path| FileRecord::open(path).unwrap())
            .collect::<Vec<_>>();

        let status = StatusInfo::collect(&records);

        assert_eq!(status.file_count, 3);
        assert_eq!(status.directory_count, 2);
        assert_eq!(
            status.to_string(),
            "Current list contains '3' files in '2' directories."
        );
    }

    #[test]
    fn empty_working_set() {
        assert_eq!(
            StatusInfo::collect(&[]).to_string(),
            "Current list contains '0' files in '0' directories."
        );
    }
}

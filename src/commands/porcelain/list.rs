use crate::areas::catalog::SortKey;
use crate::areas::repository::Repository;
use crate::artifacts::record::filter::RecordFilter;
use std::io::Write;

impl Repository {
    pub fn list(&mut self, filter: &RecordFilter, sort: Option<SortKey>) -> anyhow::Result<()> {
        self.with_catalog(|repository| {
            if let Some(key) = sort {
                repository.catalog_mut().sort_by(key)?;
            }

            let matched = repository
                .catalog_mut()
                .filter(filter)?
                .into_iter()
                .map(|record| (record.path().to_path_buf(), record.tags().to_vec()))
                .collect::<Vec<_>>();

            for (path, tags) in matched {
                let path = repository.workspace().relative(&path).display().to_string();
                match tags.as_slice() {
                    [] => writeln!(repository.writer(), "{path}")?,
                    tags => writeln!(repository.writer(), "{path} [{}]", tags.join(", "))?,
                }
            }

            Ok(())
        })
    }
}

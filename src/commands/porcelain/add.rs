use crate::areas::repository::Repository;
use crate::artifacts::record::file_record::FileRecord;
use std::io::Write;
use std::path::Path;
use tracing::debug;

impl Repository {
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.with_catalog(|repository| {
            let catalog_path = repository.catalog().path().to_path_buf();

            // Iterate over each provided path and expand it if it's a directory
            let files = paths
                .iter()
                .map(|path| {
                    repository
                        .workspace()
                        .list_files(Path::new(path), &[catalog_path.as_path()])
                })
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .flatten();

            let mut added = 0;
            for file in files {
                if repository.catalog_mut().add(FileRecord::open(&file)?) {
                    added += 1;
                } else {
                    debug!(path = %file.display(), "already tracked");
                }
            }

            writeln!(repository.writer(), "Added {added} file(s)")?;

            Ok(())
        })
    }
}

use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn tag(&mut self, tag: &str, paths: &[String]) -> anyhow::Result<()> {
        if tag.is_empty() {
            anyhow::bail!("tag cannot be empty");
        }

        self.with_catalog(|repository| {
            let mut tagged = 0;
            for path in paths {
                let path = repository.resolve(path);
                if repository.catalog_mut().add_tag(&path, tag)? {
                    tagged += 1;
                }
            }

            writeln!(repository.writer(), "Tagged {tagged} file(s) with '{tag}'")?;

            Ok(())
        })
    }
}

use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        self.with_catalog(|repository| {
            let status = repository.catalog().status();
            writeln!(repository.writer(), "{status}")?;

            Ok(())
        })
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::record::size_unit::SizeUnit;
use std::io::Write;

impl Repository {
    pub fn size(&mut self, path: &str, unit: SizeUnit) -> anyhow::Result<()> {
        self.with_catalog(|repository| {
            let path = repository.resolve(path);
            let record = repository
                .catalog_mut()
                .record_mut(&path)
                .ok_or_else(|| anyhow::anyhow!("File '{}' is not tracked", path.display()))?;

            let bytes = record.byte_len()?;
            writeln!(repository.writer(), "{}", unit.format(bytes))?;

            Ok(())
        })
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::compare::compare_result::CompareOutcome;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn compare(
        &mut self,
        this: &str,
        other: &str,
        ignore_empty_lines: bool,
    ) -> anyhow::Result<()> {
        self.with_catalog(|repository| {
            let this = repository.resolve(this);
            let other = repository.resolve(other);

            let summary = repository
                .catalog_mut()
                .compare(&this, &other, ignore_empty_lines)?;

            let outcome = repository
                .catalog()
                .record(&this)
                .and_then(|record| record.last_compare_result(&other))
                .map(|result| result.outcome());

            let summary = match outcome {
                Some(CompareOutcome::Identical) => summary.green(),
                Some(CompareOutcome::ContentMatch) => summary.yellow(),
                Some(CompareOutcome::Different { .. }) => summary.red(),
                None => summary.normal(),
            };
            writeln!(repository.writer(), "{summary}")?;

            Ok(())
        })
    }
}

use crate::artifacts::compare::line_matcher::LineMatcher;
use std::fmt::Display;

/// Outcome of comparing one file record against another
///
/// Diffs are signed and always computed as "this minus other".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareResult {
    pub size_diff: i64,
    pub line_count_diff: i64,
    /// Zero-based index of the first mismatching line from the start
    pub different_line_start: Option<usize>,
    /// Zero-based index of the first mismatching line met scanning from the end
    pub different_line_end: Option<usize>,
}

/// The three mutually exclusive verdicts a comparison can reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    /// Same size and no mismatching line
    Identical,
    /// Lines agree as far as both files go, but sizes or line counts differ
    ContentMatch,
    /// Lines disagree; both positions are one-based line numbers
    Different { first: usize, last: Option<usize> },
}

impl CompareResult {
    pub fn compute<S: AsRef<str>>(
        this_size: u64,
        other_size: u64,
        this_lines: &[S],
        other_lines: &[S],
        ignore_empty_lines: bool,
    ) -> Self {
        let (different_line_start, different_line_end) =
            LineMatcher::new(this_lines, other_lines, ignore_empty_lines).divergence_bounds();

        CompareResult {
            size_diff: this_size as i64 - other_size as i64,
            line_count_diff: this_lines.len() as i64 - other_lines.len() as i64,
            different_line_start,
            different_line_end,
        }
    }

    pub fn outcome(&self) -> CompareOutcome {
        match (self.different_line_start, self.different_line_end) {
            (None, None) if self.size_diff == 0 => CompareOutcome::Identical,
            (None, _) => CompareOutcome::ContentMatch,
            (Some(start), end) => CompareOutcome::Different {
                first: start + 1,
                last: end.map(|idx| idx + 1),
            },
        }
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome() {
            CompareOutcome::Identical => write!(f, "MATCH - files identical"),
            CompareOutcome::ContentMatch => write!(
                f,
                "CONTENT MATCH - file sizes differ (size diff = {}, line diff = {})",
                self.size_diff, self.line_count_diff
            ),
            CompareOutcome::Different { first, last } => {
                write!(f, "DIFFERENT - first different line from start = {first}")?;
                match last {
                    Some(last) => write!(f, ", last different line from end = {last}"),
                    None => write!(f, ", no different line from end"),
                }
            }
        }
    }
}

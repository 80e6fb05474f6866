use derive_new::new;

/// Which end of the two line sequences a scan starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    FromStart,
    FromEnd,
}

/// Bidirectional line matcher
///
/// Walks two line sequences in lockstep, either from their first lines or
/// from their last lines, and reports where they stop agreeing. It only
/// bounds the divergent region; it does not try to align the lines inside it.
#[derive(Debug, Clone, new)]
pub struct LineMatcher<'l, S> {
    this: &'l [S],
    other: &'l [S],
    ignore_empty_lines: bool,
}

impl<'l, S: AsRef<str>> LineMatcher<'l, S> {
    /// Index (in `this`'s own coordinates) of the first mismatching line met
    /// while scanning in `direction`.
    ///
    /// Returns `None` when either sequence runs out before a mismatch is
    /// found, which includes the case where one of them is empty.
    pub fn first_divergence(&self, direction: ScanDirection) -> Option<usize> {
        let mut this = LineCursor::new(self.this, direction);
        let mut other = LineCursor::new(self.other, direction);

        while !this.is_exhausted() && !other.is_exhausted() {
            if self.ignore_empty_lines {
                this.skip_empty_lines();
                other.skip_empty_lines();
            }

            if let (Some(this_line), Some(other_line)) = (this.line(), other.line())
                && this_line != other_line
            {
                return this.index();
            }

            this.advance();
            other.advance();
        }

        None
    }

    /// Forward scan, followed by a backward scan only when the forward one
    /// found a mismatch.
    pub fn divergence_bounds(&self) -> (Option<usize>, Option<usize>) {
        match self.first_divergence(ScanDirection::FromStart) {
            None => (None, None),
            Some(start) => (Some(start), self.first_divergence(ScanDirection::FromEnd)),
        }
    }
}

/// Position of a scan inside one sequence.
///
/// `consumed` counts the lines already stepped over, so the exclusive end of
/// the range is always `lines.len()` regardless of direction.
struct LineCursor<'l, S> {
    lines: &'l [S],
    direction: ScanDirection,
    consumed: usize,
}

impl<'l, S: AsRef<str>> LineCursor<'l, S> {
    fn new(lines: &'l [S], direction: ScanDirection) -> Self {
        LineCursor {
            lines,
            direction,
            consumed: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.consumed >= self.lines.len()
    }

    fn index(&self) -> Option<usize> {
        if self.is_exhausted() {
            return None;
        }

        match self.direction {
            ScanDirection::FromStart => Some(self.consumed),
            ScanDirection::FromEnd => Some(self.lines.len() - 1 - self.consumed),
        }
    }

    fn line(&self) -> Option<&'l str> {
        let lines: &'l [S] = self.lines;
        self.index().map(|idx| lines[idx].as_ref())
    }

    fn skip_empty_lines(&mut self) {
        while self.line().is_some_and(str::is_empty) {
            self.consumed += 1;
        }
    }

    fn advance(&mut self) {
        if !self.is_exhausted() {
            self.consumed += 1;
        }
    }
}

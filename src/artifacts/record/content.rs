use crate::errors::{RecordError, RecordResult};
use std::path::Path;

/// Lazy content cache of a file record
///
/// A failed load is remembered so the file is read at most once per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentState {
    #[default]
    NotLoaded,
    Loaded(Vec<String>),
    Failed(RecordError),
}

impl ContentState {
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            ContentState::Loaded(lines) => Some(lines),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ContentState::Loaded(_))
    }
}

impl From<Option<Vec<String>>> for ContentState {
    fn from(lines: Option<Vec<String>>) -> Self {
        lines.map_or(ContentState::NotLoaded, ContentState::Loaded)
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a file as text lines, decoding invalid UTF-8 lossily
///
/// A leading byte order mark is not part of the first line.
pub fn read_lines(path: &Path) -> RecordResult<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|err| RecordError::from_io(path, err))?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(text
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text.as_ref())
        .lines()
        .map(str::to_string)
        .collect())
}

pub fn byte_len(path: &Path) -> RecordResult<u64> {
    let metadata = std::fs::metadata(path).map_err(|err| RecordError::from_io(path, err))?;

    Ok(metadata.len())
}

use crate::artifacts::record::file_record::FileRecord;
use crate::errors::RecordResult;

/// Criteria a tracked file must meet to be listed
///
/// Every criterion that is set must match. Content is only loaded when a
/// content criterion is present and the cheaper checks already passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub ignore_case: bool,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.name.is_none() && self.content.is_none()
    }

    pub fn matches(&self, record: &mut FileRecord) -> RecordResult<bool> {
        if let Some(tag) = &self.tag
            && !record.has_tag(tag)
        {
            return Ok(false);
        }

        if let Some(name) = &self.name
            && !record.matches_filename(name, self.ignore_case)
        {
            return Ok(false);
        }

        match &self.content {
            Some(content) => record.content_contains(content, self.ignore_case),
            None => Ok(true),
        }
    }
}

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter};

use invite_model::RosterRow;

use crate::error::{IngestError, Result};

/// Lazy reader over the roster file.
///
/// The header row is read and normalized at open; every subsequent record
/// becomes one [`RosterRow`] in file order. Positions come from the input
/// line a record starts on, with the header line not counted, so a fully
/// blank line (which produces no record) leaves a gap in the numbering
/// instead of renumbering every row after it. Rows shorter than the header
/// are padded with empty cells and extra cells are dropped, so a row always
/// has one value per column. Rows of empty cells are yielded like any other
/// and left to validation.
///
/// The source is consumed by iteration and cannot be restarted.
pub struct RosterSource {
    headers: Vec<String>,
    records: StringRecordsIntoIter<File>,
    position: usize,
}

impl RosterSource {
    /// Open the roster and read its header row. Fails when the file cannot
    /// be opened or the header is unreadable.
    pub fn open(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let headers = reader.headers()?.iter().map(normalize).collect();
        Ok(Self {
            headers,
            records: reader.into_records(),
            position: 0,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for RosterSource {
    type Item = Result<RosterRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => return Some(Err(IngestError::from(err))),
        };
        // The reader skips fully blank lines without yielding a record, so
        // positions are derived from line numbers rather than counted.
        self.position = match record.position() {
            Some(pos) => pos.line().saturating_sub(1) as usize,
            None => self.position + 1,
        };
        let fields = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("");
                (header.clone(), normalize(value))
            })
            .collect();
        Some(Ok(RosterRow::new(self.position, fields)))
    }
}

/// Header names and cell values get the same cleanup: any byte-order mark
/// is stripped first, then surrounding whitespace.
fn normalize(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalization_strips_padding_and_bom() {
        assert_eq!(normalize("\u{feff}email "), "email");
        assert_eq!(normalize("\u{feff} email"), "email");
        assert_eq!(normalize("  first_name"), "first_name");
        assert_eq!(normalize(" ivan@example.com "), "ivan@example.com");
    }
}

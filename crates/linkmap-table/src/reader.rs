//! Link-table reading operations.
//!
//! [`LinkTableReader`] wraps a CSV reader over any [`io::Read`] source,
//! validates the header row against [`required_columns`], and extracts
//! rows by column position. Reading is resilient: a row the CSV layer
//! cannot decode, or one without an issue key, is skipped with a
//! [`Warning`] and processing continues.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::columns::{ISSUE_KEY_COLUMN, LINK_COLUMNS, LinkColumn, SUMMARY_COLUMN, required_columns};
use crate::error::{Error, Result};
use crate::warning::{Warning, WarningCollector};

/// One row of the link table, as exported.
///
/// `link_fields` holds the raw cell text of each link column that was
/// present and non-blank; splitting the comma-separated keys and mapping
/// columns to relationship labels is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    /// 1-based CSV record number (header row not counted).
    pub record_number: usize,
    /// The issue's unique key, taken from the `Issue key` column.
    pub key: String,
    /// The issue's summary text; empty string when the cell is blank.
    pub summary: String,
    /// Raw text of each present, non-blank link cell.
    pub link_fields: Vec<(LinkColumn, String)>,
}

/// The result of reading a link table: extracted rows plus any warnings
/// raised along the way.
#[derive(Debug)]
pub struct ReadOutcome {
    /// Successfully extracted rows, in file order.
    pub rows: Vec<IssueRow>,
    /// Non-fatal problems encountered during the read.
    pub warnings: Vec<Warning>,
}

/// Positions of the recognized columns within the header row.
#[derive(Debug, Clone)]
struct ColumnIndices {
    issue_key: usize,
    summary: usize,
    links: [(LinkColumn, usize); 8],
    header_len: usize,
}

impl ColumnIndices {
    /// Locates every required column, failing on the first absent header.
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::MissingColumn {
                    name: name.to_string(),
                })
        };

        // Validate in the documented order so the reported column is the
        // first missing one, not an arbitrary one.
        for name in required_columns() {
            position(name)?;
        }

        let mut links = [(LinkColumn::InwardBlocks, 0usize); 8];
        for (slot, column) in links.iter_mut().zip(LINK_COLUMNS) {
            *slot = (column, position(column.name())?);
        }

        Ok(Self {
            issue_key: position(ISSUE_KEY_COLUMN)?,
            summary: position(SUMMARY_COLUMN)?,
            links,
            header_len: headers.len(),
        })
    }
}

/// Reader for Jira issue-link CSV exports.
///
/// Construction validates the header row; row extraction happens in
/// [`read_rows`](Self::read_rows).
pub struct LinkTableReader<R> {
    reader: csv::Reader<R>,
    indices: ColumnIndices,
}

impl<R> std::fmt::Debug for LinkTableReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkTableReader")
            .field("indices", &self.indices)
            .finish_non_exhaustive()
    }
}

impl<R: io::Read> LinkTableReader<R> {
    /// Creates a reader over the given source and validates its header.
    ///
    /// The CSV reader runs in flexible mode so rows with a deviating
    /// field count are reported as warnings instead of aborting the read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] if the header row cannot be read, or
    /// [`Error::MissingColumn`] naming the first required column that is
    /// absent.
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source);
        let headers = reader.headers()?.clone();
        let indices = ColumnIndices::from_headers(&headers)?;
        Ok(Self { reader, indices })
    }

    /// Reads every row, skipping the unreadable ones with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] only if the underlying source fails in a way
    /// the CSV layer cannot recover from; per-row problems become
    /// warnings in the returned [`ReadOutcome`].
    pub fn read_rows(mut self) -> Result<ReadOutcome> {
        let mut rows = Vec::new();
        let mut collector = WarningCollector::new();
        let mut record = csv::StringRecord::new();
        let mut record_number = 0usize;

        loop {
            record_number += 1;
            match self.reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    if let Some(row) =
                        extract_row(&record, &self.indices, record_number, &mut collector)
                    {
                        rows.push(row);
                    }
                }
                Err(err) => {
                    // An IO failure will not clear on retry; only
                    // per-record decode problems are skippable.
                    if err.is_io_error() {
                        return Err(err.into());
                    }
                    tracing::debug!(record_number, error = %err, "skipping unreadable record");
                    collector.add(Warning::SkippedRow {
                        record_number,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            rows = rows.len(),
            warnings = collector.len(),
            "link table read complete"
        );

        Ok(ReadOutcome {
            rows,
            warnings: collector.into_warnings(),
        })
    }
}

/// Extracts a single [`IssueRow`] from a CSV record, or records a warning
/// and returns `None` when the row has no usable issue key.
fn extract_row(
    record: &csv::StringRecord,
    indices: &ColumnIndices,
    record_number: usize,
    collector: &mut WarningCollector,
) -> Option<IssueRow> {
    let key = match record.get(indices.issue_key) {
        Some(cell) if !cell.trim().is_empty() => cell.trim().to_string(),
        Some(_) => {
            collector.add(Warning::SkippedRow {
                record_number,
                reason: "empty issue key".to_string(),
            });
            return None;
        }
        None => {
            collector.add(Warning::SkippedRow {
                record_number,
                reason: "issue key field absent".to_string(),
            });
            return None;
        }
    };

    if record.len() < indices.header_len {
        collector.add(Warning::ShortRecord {
            record_number,
            missing: indices.header_len - record.len(),
        });
    }

    let summary = record.get(indices.summary).unwrap_or("").to_string();

    let mut link_fields = Vec::new();
    for (column, index) in indices.links {
        // Absent or blank cells mean "no links of this type"; they are
        // not warnings.
        if let Some(cell) = record.get(index) {
            if !cell.trim().is_empty() {
                link_fields.push((column, cell.to_string()));
            }
        }
    }

    Some(IssueRow {
        record_number,
        key,
        summary,
        link_fields,
    })
}

/// Reads a link table from a file on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, or any error
/// [`LinkTableReader::new`] / [`LinkTableReader::read_rows`] can raise.
pub fn read_link_table(path: &Path) -> Result<ReadOutcome> {
    let file = File::open(path)?;
    LinkTableReader::new(file)?.read_rows()
}

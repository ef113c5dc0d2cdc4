//! Warning types for non-fatal problems during link-table loading.
//!
//! A malformed or incomplete row should not abort the whole read: the row
//! is skipped (or partially read) and the problem is reported back to the
//! caller as a [`Warning`]. The [`WarningCollector`] accumulates warnings
//! during a single read pass.

/// A non-fatal problem encountered while reading the link table.
///
/// Each variant carries the 1-based CSV record number (the header row is
/// not counted) so the caller can point the user at the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A row was skipped entirely.
    ///
    /// Raised when the CSV layer could not read the record, or when the
    /// issue-key cell is missing or blank (a row without a key cannot be
    /// attached to any issue).
    SkippedRow {
        /// The 1-based record number that was skipped.
        record_number: usize,
        /// Why the row was skipped.
        reason: String,
    },

    /// A row had fewer fields than the header.
    ///
    /// The row is still processed; the physically absent cells are treated
    /// as empty link fields.
    ShortRecord {
        /// The 1-based record number of the short row.
        record_number: usize,
        /// How many trailing fields were absent.
        missing: usize,
    },
}

impl Warning {
    /// Returns the record number associated with this warning.
    #[must_use]
    pub fn record_number(&self) -> usize {
        match self {
            Self::SkippedRow { record_number, .. } | Self::ShortRecord { record_number, .. } => {
                *record_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::SkippedRow {
                record_number,
                reason,
            } => format!("record {record_number}: skipped: {reason}"),
            Self::ShortRecord {
                record_number,
                missing,
            } => format!(
                "record {record_number}: {missing} trailing field(s) absent, treated as empty"
            ),
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SkippedRow { .. } => "skipped_row",
            Self::ShortRecord { .. } => "short_record",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

/// Accumulates warnings during a read pass.
///
/// Loading is synchronous and single-threaded, so this is a plain
/// `Vec`-backed collector with no interior mutability.
#[derive(Debug, Default)]
pub struct WarningCollector {
    warnings: Vec<Warning>,
}

impl WarningCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning.
    pub fn add(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Returns the number of warnings collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Consumes the collector and returns the warnings in arrival order.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_row_stores_record_number_and_reason() {
        let warning = Warning::SkippedRow {
            record_number: 7,
            reason: "empty issue key".to_string(),
        };

        assert_eq!(warning.record_number(), 7);
        assert_eq!(warning.kind(), "skipped_row");
        let desc = warning.description();
        assert!(desc.contains("record 7"));
        assert!(desc.contains("empty issue key"));
    }

    #[test]
    fn short_record_describes_missing_fields() {
        let warning = Warning::ShortRecord {
            record_number: 3,
            missing: 2,
        };

        assert_eq!(warning.record_number(), 3);
        assert_eq!(warning.kind(), "short_record");
        let desc = warning.description();
        assert!(desc.contains("record 3"));
        assert!(desc.contains("2 trailing field(s)"));
    }

    #[test]
    fn display_matches_description() {
        let warning = Warning::SkippedRow {
            record_number: 1,
            reason: "unreadable".to_string(),
        };
        assert_eq!(warning.to_string(), warning.description());
    }

    #[test]
    fn collector_preserves_order() {
        let mut collector = WarningCollector::new();
        assert!(collector.is_empty());

        for i in 1..=5 {
            collector.add(Warning::SkippedRow {
                record_number: i,
                reason: format!("reason{i}"),
            });
        }

        assert_eq!(collector.len(), 5);
        let warnings = collector.into_warnings();
        for (i, warning) in warnings.iter().enumerate() {
            assert_eq!(warning.record_number(), i + 1);
        }
    }
}

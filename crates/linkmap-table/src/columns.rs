//! Column names recognized in a Jira issue-link export.
//!
//! The header texts here must match the export byte-for-byte, including
//! the parenthesized link-type suffixes.

/// Header of the column holding the issue's unique key.
pub const ISSUE_KEY_COLUMN: &str = "Issue key";

/// Header of the column holding the issue's summary text.
pub const SUMMARY_COLUMN: &str = "Summary";

/// One of the eight typed link columns in the export.
///
/// Jira exports each link type as an inward and an outward column; a cell
/// holds a comma-separated list of related issue keys, or is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkColumn {
    /// `Inward issue link (Blocks)`
    InwardBlocks,
    /// `Outward issue link (Blocks)`
    OutwardBlocks,
    /// `Inward issue link (Cloners)`
    InwardCloners,
    /// `Outward issue link (Cloners)`
    OutwardCloners,
    /// `Inward issue link (Duplicate)`
    InwardDuplicate,
    /// `Outward issue link (Duplicate)`
    OutwardDuplicate,
    /// `Inward issue link (Relates)`
    InwardRelates,
    /// `Outward issue link (Relates)`
    OutwardRelates,
}

/// All link columns, in export order.
pub const LINK_COLUMNS: [LinkColumn; 8] = [
    LinkColumn::InwardBlocks,
    LinkColumn::OutwardBlocks,
    LinkColumn::InwardCloners,
    LinkColumn::OutwardCloners,
    LinkColumn::InwardDuplicate,
    LinkColumn::OutwardDuplicate,
    LinkColumn::InwardRelates,
    LinkColumn::OutwardRelates,
];

impl LinkColumn {
    /// Returns the exact header text for this column.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InwardBlocks => "Inward issue link (Blocks)",
            Self::OutwardBlocks => "Outward issue link (Blocks)",
            Self::InwardCloners => "Inward issue link (Cloners)",
            Self::OutwardCloners => "Outward issue link (Cloners)",
            Self::InwardDuplicate => "Inward issue link (Duplicate)",
            Self::OutwardDuplicate => "Outward issue link (Duplicate)",
            Self::InwardRelates => "Inward issue link (Relates)",
            Self::OutwardRelates => "Outward issue link (Relates)",
        }
    }
}

impl std::fmt::Display for LinkColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every column a well-formed export must carry, in a fixed order.
///
/// The key and summary columns come first, then the link columns in
/// export order.
#[must_use]
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![ISSUE_KEY_COLUMN, SUMMARY_COLUMN];
    columns.extend(LINK_COLUMNS.iter().map(|c| c.name()));
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_column_names_match_export_headers() {
        assert_eq!(
            LinkColumn::InwardBlocks.name(),
            "Inward issue link (Blocks)"
        );
        assert_eq!(
            LinkColumn::OutwardBlocks.name(),
            "Outward issue link (Blocks)"
        );
        assert_eq!(
            LinkColumn::InwardCloners.name(),
            "Inward issue link (Cloners)"
        );
        assert_eq!(
            LinkColumn::OutwardCloners.name(),
            "Outward issue link (Cloners)"
        );
        assert_eq!(
            LinkColumn::InwardDuplicate.name(),
            "Inward issue link (Duplicate)"
        );
        assert_eq!(
            LinkColumn::OutwardDuplicate.name(),
            "Outward issue link (Duplicate)"
        );
        assert_eq!(
            LinkColumn::InwardRelates.name(),
            "Inward issue link (Relates)"
        );
        assert_eq!(
            LinkColumn::OutwardRelates.name(),
            "Outward issue link (Relates)"
        );
    }

    #[test]
    fn required_columns_has_ten_entries() {
        let columns = required_columns();
        assert_eq!(columns.len(), 10);
        assert_eq!(columns[0], ISSUE_KEY_COLUMN);
        assert_eq!(columns[1], SUMMARY_COLUMN);
    }

    #[test]
    fn display_matches_name() {
        for column in LINK_COLUMNS {
            assert_eq!(column.to_string(), column.name());
        }
    }
}

//! Domain types for issue-link mindmaps.
//!
//! This module contains the core vocabulary: issue keys, relationship
//! labels, and the per-issue record accumulated from the export.

use linkmap_table::LinkColumn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an issue, e.g. `PROJ-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IssueKey(pub String);

impl IssueKey {
    /// Create a new issue key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IssueKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IssueKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The relationship carried by a link, as worded on the edge.
///
/// The wording encodes the inward/outward direction of the source
/// tracker's link types; edges themselves always point from the row's
/// issue to the linked issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkLabel {
    /// The row's issue blocks the linked issue.
    #[serde(rename = "blocks")]
    Blocks,

    /// The row's issue is blocked by the linked issue.
    #[serde(rename = "is blocked by")]
    IsBlockedBy,

    /// The linked issue is a clone of the row's issue.
    #[serde(rename = "is cloned by")]
    IsClonedBy,

    /// The row's issue is a clone of the linked issue.
    #[serde(rename = "clones")]
    Clones,

    /// The linked issue duplicates the row's issue.
    #[serde(rename = "is duplicated by")]
    IsDuplicatedBy,

    /// The row's issue duplicates the linked issue.
    #[serde(rename = "duplicates")]
    Duplicates,

    /// Undirected informational relation.
    #[serde(rename = "relates to")]
    RelatesTo,
}

impl LinkLabel {
    /// The label text as rendered on an edge.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::IsBlockedBy => "is blocked by",
            Self::IsClonedBy => "is cloned by",
            Self::Clones => "clones",
            Self::IsDuplicatedBy => "is duplicated by",
            Self::Duplicates => "duplicates",
            Self::RelatesTo => "relates to",
        }
    }
}

impl fmt::Display for LinkLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed mapping from export column to edge label.
///
/// Note the asymmetry: the inward Blocks column maps to `blocks` while
/// the outward one maps to `is blocked by`. Jira's inward/outward
/// phrasing describes the relationship from the linked issue's point of
/// view, so the wording flips while the edge keeps pointing from the
/// row's issue to the linked issue.
#[must_use]
pub fn link_label_for(column: LinkColumn) -> LinkLabel {
    match column {
        LinkColumn::InwardBlocks => LinkLabel::Blocks,
        LinkColumn::OutwardBlocks => LinkLabel::IsBlockedBy,
        LinkColumn::InwardCloners => LinkLabel::IsClonedBy,
        LinkColumn::OutwardCloners => LinkLabel::Clones,
        LinkColumn::InwardDuplicate => LinkLabel::IsDuplicatedBy,
        LinkColumn::OutwardDuplicate => LinkLabel::Duplicates,
        LinkColumn::InwardRelates | LinkColumn::OutwardRelates => LinkLabel::RelatesTo,
    }
}

/// A typed link from one issue to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Key of the linked issue.
    pub target: IssueKey,

    /// Relationship label for the edge.
    pub label: LinkLabel,
}

/// Everything recorded about one issue across the whole export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRecord {
    /// Summary from the issue's first-encountered row.
    pub summary: String,

    /// Outgoing links accumulated from every row mentioning the issue.
    pub links: Vec<Link>,
}

impl IssueRecord {
    /// Display label used for the issue's graph node.
    #[must_use]
    pub fn display_label(&self, key: &IssueKey) -> String {
        format!("{}: {}", key, self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_text_matches_vocabulary() {
        assert_eq!(LinkLabel::Blocks.as_str(), "blocks");
        assert_eq!(LinkLabel::IsBlockedBy.as_str(), "is blocked by");
        assert_eq!(LinkLabel::IsClonedBy.as_str(), "is cloned by");
        assert_eq!(LinkLabel::Clones.as_str(), "clones");
        assert_eq!(LinkLabel::IsDuplicatedBy.as_str(), "is duplicated by");
        assert_eq!(LinkLabel::Duplicates.as_str(), "duplicates");
        assert_eq!(LinkLabel::RelatesTo.as_str(), "relates to");
    }

    #[test]
    fn inward_outward_mapping_is_asymmetric_for_blocks() {
        assert_eq!(
            link_label_for(LinkColumn::InwardBlocks),
            LinkLabel::Blocks
        );
        assert_eq!(
            link_label_for(LinkColumn::OutwardBlocks),
            LinkLabel::IsBlockedBy
        );
    }

    #[test]
    fn relates_maps_to_the_same_label_both_ways() {
        assert_eq!(
            link_label_for(LinkColumn::InwardRelates),
            LinkLabel::RelatesTo
        );
        assert_eq!(
            link_label_for(LinkColumn::OutwardRelates),
            LinkLabel::RelatesTo
        );
    }

    #[test]
    fn display_label_concatenates_key_and_summary() {
        let record = IssueRecord {
            summary: "Fix bug".to_string(),
            links: Vec::new(),
        };
        assert_eq!(
            record.display_label(&IssueKey::new("PROJ-1")),
            "PROJ-1: Fix bug"
        );
    }

    #[test]
    fn display_label_with_empty_summary_keeps_separator() {
        let record = IssueRecord::default();
        assert_eq!(record.display_label(&IssueKey::new("PROJ-2")), "PROJ-2: ");
    }

    #[test]
    fn labels_serialize_as_edge_text() {
        let json = serde_json::to_string(&LinkLabel::IsBlockedBy).unwrap();
        assert_eq!(json, "\"is blocked by\"");
    }
}

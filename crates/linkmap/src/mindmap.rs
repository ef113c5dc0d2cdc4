//! The mindmap builder: from export rows to an indexed link structure.
//!
//! [`build_mindmap`] makes a single pass over the rows and produces a
//! [`LinkIndex`], an explicit local value mapping each issue key to its
//! [`IssueRecord`]. The index keeps first-seen key order so downstream
//! rendering is deterministic for a given input file.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use linkmap_table::IssueRow;

use crate::domain::{IssueKey, IssueRecord, Link, link_label_for};

/// Issue key to record mapping, in first-seen order.
///
/// The full index is retained unfiltered: an issue that ends up with no
/// outgoing links is excluded from the primary iteration
/// ([`linked_issues`](Self::linked_issues)) but must stay resolvable for
/// edge-target label lookup.
#[derive(Debug, Default)]
pub struct LinkIndex {
    records: HashMap<IssueKey, IssueRecord>,
    order: Vec<IssueKey>,
}

impl LinkIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct issue keys observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no rows have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if the key appeared as a row's primary issue key.
    #[must_use]
    pub fn contains(&self, key: &IssueKey) -> bool {
        self.records.contains_key(key)
    }

    /// Looks up the record for a key.
    #[must_use]
    pub fn get(&self, key: &IssueKey) -> Option<&IssueRecord> {
        self.records.get(key)
    }

    /// Iterates over all issues in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&IssueKey, &IssueRecord)> {
        self.order
            .iter()
            .filter_map(move |key| self.records.get(key).map(|record| (key, record)))
    }

    /// Iterates over issues with at least one outgoing link, in
    /// first-seen order.
    ///
    /// This is the primary iteration for graph construction: isolated
    /// issues add no information to a relationship map.
    pub fn linked_issues(&self) -> impl Iterator<Item = (&IssueKey, &IssueRecord)> {
        self.iter().filter(|(_, record)| !record.links.is_empty())
    }

    /// Folds one export row into the index.
    ///
    /// The first row seen for a key fixes its summary; later rows never
    /// overwrite it, even when the recorded summary is blank and the new
    /// one is not. Links accumulate across every row mentioning the key
    /// and are never deduplicated.
    pub fn insert_row(&mut self, row: &IssueRow) {
        let key = IssueKey::new(row.key.clone());
        let record = match self.records.entry(key.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(key);
                entry.insert(IssueRecord {
                    summary: row.summary.clone(),
                    links: Vec::new(),
                })
            }
        };

        for (column, cell) in &row.link_fields {
            let label = link_label_for(*column);
            for target in split_link_cell(cell) {
                record.links.push(Link {
                    target: IssueKey::new(target),
                    label,
                });
            }
        }
    }
}

/// Splits a link cell into its linked issue keys.
///
/// Cells hold a comma-separated key list; each piece is trimmed and
/// empty pieces are dropped.
fn split_link_cell(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').map(str::trim).filter(|piece| !piece.is_empty())
}

/// Builds the link index from export rows in a single pass.
#[must_use]
pub fn build_mindmap(rows: &[IssueRow]) -> LinkIndex {
    let mut index = LinkIndex::new();
    for row in rows {
        index.insert_row(row);
    }
    tracing::debug!(
        issues = index.len(),
        linked = index.linked_issues().count(),
        "mindmap structure built"
    );
    index
}

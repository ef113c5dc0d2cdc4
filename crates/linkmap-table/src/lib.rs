//! Resilient loading of Jira issue-link CSV exports.
//!
//! This crate reads the tabular export produced by Jira's issue search
//! (issue keys, summaries, and the eight typed link columns) into plain
//! rows. Loading is resilient: rows that cannot be read are skipped and
//! reported as [`warning::Warning`] values rather than aborting the whole
//! read, while a missing required column fails fast with an error naming
//! the absent header.
//!
//! Link semantics (which column means which relationship) are left to the
//! consumer; this crate only knows column names and cell text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod columns;
pub mod error;
pub mod reader;
pub mod warning;

pub use columns::{ISSUE_KEY_COLUMN, LinkColumn, SUMMARY_COLUMN, required_columns};
pub use error::{Error, Result};
pub use reader::{IssueRow, LinkTableReader, ReadOutcome, read_link_table};
pub use warning::{Warning, WarningCollector};

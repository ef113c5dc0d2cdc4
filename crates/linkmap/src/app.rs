//! End-to-end pipeline from CSV export to rendered artifact.
//!
//! [`generate`] is the single entry point the CLI (and library users)
//! drive: load the export, build the mindmap, materialize the graph,
//! write the artifact. The whole structure is built in one pass and
//! discarded after rendering; nothing persists between runs.

use std::path::{Path, PathBuf};

use linkmap_table::{Warning, read_link_table};

use crate::error::Result;
use crate::graph::build_graph;
use crate::mindmap::build_mindmap;
use crate::render::{RenderBackend, write_artifact};

/// Outcome of one end-to-end run.
#[derive(Debug)]
pub struct RunReport {
    /// Distinct issue keys observed in the export.
    pub issues: usize,

    /// Nodes in the rendered graph.
    pub nodes: usize,

    /// Edges in the rendered graph.
    pub edges: usize,

    /// Non-fatal problems raised while loading the export.
    pub warnings: Vec<Warning>,

    /// Where the artifact was written.
    pub output: PathBuf,
}

/// Loads the export at `csv_path`, builds the graph, and writes the
/// artifact rendered by `backend`.
///
/// When `output` is `None` the backend's default file name is used,
/// relative to the current directory.
///
/// # Errors
///
/// Returns an error when the export cannot be loaded (including a
/// missing required column) or the artifact cannot be written. Malformed
/// rows are not errors; they surface as warnings in the report.
pub fn generate(
    csv_path: &Path,
    backend: RenderBackend,
    output: Option<PathBuf>,
) -> Result<RunReport> {
    tracing::debug!(path = %csv_path.display(), "loading link table");
    let outcome = read_link_table(csv_path)?;

    let index = build_mindmap(&outcome.rows);
    let graph = build_graph(&index);

    let output = output.unwrap_or_else(|| PathBuf::from(backend.default_output()));
    write_artifact(&graph, backend, &output)?;

    Ok(RunReport {
        issues: index.len(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        warnings: outcome.warnings,
        output,
    })
}

//! Rendering backends for the materialized mindmap.
//!
//! One shared graph feeds two renderers: a Graphviz DOT document for
//! static inspection and a self-contained interactive HTML page. The
//! backend is selected by [`RenderBackend`]; both consume the same
//! [`MindmapGraph`](crate::graph::MindmapGraph).

mod dot;
mod html;

use std::fs;
use std::path::Path;

use crate::graph::MindmapGraph;

pub use dot::to_dot;
pub use html::to_html;

/// Which rendering backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBackend {
    /// Graphviz DOT output, laid out and drawn by `dot`.
    Static,

    /// Self-contained HTML page with a pannable, zoomable canvas.
    Interactive,
}

impl RenderBackend {
    /// Default artifact file name for this backend.
    #[must_use]
    pub fn default_output(self) -> &'static str {
        match self {
            Self::Static => "mindmap.dot",
            Self::Interactive => "mindmap.html",
        }
    }
}

/// Renders the graph with the selected backend.
#[must_use]
pub fn render(graph: &MindmapGraph, backend: RenderBackend) -> String {
    match backend {
        RenderBackend::Static => to_dot(graph),
        RenderBackend::Interactive => to_html(graph),
    }
}

/// Renders the graph and writes the artifact to `path`.
///
/// # Errors
///
/// Returns an IO error if the artifact cannot be written.
pub fn write_artifact(
    graph: &MindmapGraph,
    backend: RenderBackend,
    path: &Path,
) -> std::io::Result<()> {
    let content = render(graph, backend);
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_outputs_match_backend() {
        assert_eq!(RenderBackend::Static.default_output(), "mindmap.dot");
        assert_eq!(RenderBackend::Interactive.default_output(), "mindmap.html");
    }

    #[test]
    fn render_dispatches_on_backend() {
        let graph = MindmapGraph::default();
        assert!(render(&graph, RenderBackend::Static).contains("digraph"));
        assert!(render(&graph, RenderBackend::Interactive).starts_with("<!doctype html>"));
    }
}

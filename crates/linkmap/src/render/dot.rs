//! Graphviz DOT emission for the static rendering variant.
//!
//! Layout and drawing are Graphviz's job; this module only emits the
//! document. Node identifiers are positional (`n0`, `n1`, ...) so label
//! text never has to be a valid DOT identifier.

use chrono::Utc;

use crate::graph::MindmapGraph;

/// Title shown above the static rendering.
pub const STATIC_TITLE: &str = "Mindmap des Issues Jira avec Liens";

/// Escapes a string for use inside a double-quoted DOT attribute.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Converts the mindmap graph to DOT format for visualization.
#[must_use]
pub fn to_dot(graph: &MindmapGraph) -> String {
    let mut lines = Vec::new();
    lines.push(format!("// generated by linkmap {}", Utc::now().to_rfc3339()));
    lines.push("digraph mindmap {".to_string());
    lines.push("    rankdir=TB;".to_string());
    lines.push(format!("    label=\"{}\";", escape(STATIC_TITLE)));
    lines.push("    labelloc=\"t\";".to_string());
    lines.push("    node [shape=box, style=filled, fillcolor=\"lightblue\"];".to_string());
    lines.push("    edge [fontcolor=\"red\"];".to_string());

    for (index, node) in graph.nodes() {
        lines.push(format!(
            "    n{} [label=\"{}\"];",
            index.index(),
            escape(&node.label)
        ));
    }

    for (source, target, label) in graph.edges() {
        lines.push(format!(
            "    n{} -> n{} [label=\"{}\"];",
            source.index(),
            target.index(),
            escape(label.as_str())
        ));
    }

    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}

//! Graph materialization using petgraph.
//!
//! Converts a built [`LinkIndex`] into a directed graph whose nodes carry
//! issue display labels and whose edges carry relationship labels. Node
//! indices are tracked through a key-to-index map so each issue
//! materializes exactly once.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;

use crate::domain::{IssueKey, IssueRecord, LinkLabel};
use crate::mindmap::LinkIndex;

/// A node of the materialized mindmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MindmapNode {
    /// The issue's key.
    pub key: IssueKey,

    /// Display label, `"{key}: {summary}"`.
    pub label: String,
}

/// The materialized issue-link graph.
#[derive(Debug, Default)]
pub struct MindmapGraph {
    graph: DiGraph<MindmapNode, LinkLabel>,
}

impl MindmapGraph {
    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over nodes in materialization order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &MindmapNode)> {
        self.graph
            .node_indices()
            .map(move |index| (index, &self.graph[index]))
    }

    /// Iterates over edges as (source, target, label) triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, LinkLabel)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), *edge.weight()))
    }

    /// Looks up a node's payload.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &MindmapNode {
        &self.graph[index]
    }

    /// Total connectivity of a node: incoming plus outgoing edges.
    ///
    /// Used by the interactive renderer's marker coloring.
    #[must_use]
    pub fn degree(&self, index: NodeIndex) -> usize {
        self.graph.edges_directed(index, Direction::Incoming).count()
            + self.graph.edges_directed(index, Direction::Outgoing).count()
    }

}

/// Returns the node for a key, materializing it on first use.
fn ensure_node(
    graph: &mut DiGraph<MindmapNode, LinkLabel>,
    node_map: &mut HashMap<IssueKey, NodeIndex>,
    key: &IssueKey,
    record: &IssueRecord,
) -> NodeIndex {
    if let Some(&index) = node_map.get(key) {
        return index;
    }
    let index = graph.add_node(MindmapNode {
        key: key.clone(),
        label: record.display_label(key),
    });
    node_map.insert(key.clone(), index);
    index
}

/// Materializes the directed graph from the link index.
///
/// One node per linked issue; an edge per link whose target exists in the
/// full (unfiltered) index. A target that was only ever referenced by
/// links, never observed as a row's own key, is a dangling reference and
/// its edges are dropped. A target that exists but has no links of its
/// own still gets a node, created on demand as an edge endpoint.
#[must_use]
pub fn build_graph(index: &LinkIndex) -> MindmapGraph {
    let mut graph = DiGraph::new();
    let mut node_map: HashMap<IssueKey, NodeIndex> = HashMap::new();

    for (key, record) in index.linked_issues() {
        let source = ensure_node(&mut graph, &mut node_map, key, record);

        for link in &record.links {
            let Some(target_record) = index.get(&link.target) else {
                tracing::debug!(
                    source = %key,
                    target = %link.target,
                    "dropping link to an issue never seen as a primary key"
                );
                continue;
            };
            let target = ensure_node(&mut graph, &mut node_map, &link.target, target_record);
            graph.add_edge(source, target, link.label);
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "mindmap graph materialized"
    );

    MindmapGraph { graph }
}

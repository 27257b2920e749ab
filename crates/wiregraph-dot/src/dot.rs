//! DOT text generation.

use std::fmt::Write;

use wiregraph_collect::{RenderEdge, RenderNode};

/// Style annotation applied to every node declaration by default.
pub const DEFAULT_NODE_STYLE: &str = "[shape=box]";

/// Options for DOT rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Attribute list emitted verbatim after each quoted node label.
    pub node_style: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            node_style: DEFAULT_NODE_STYLE.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the per-node style annotation.
    pub fn with_node_style(mut self, style: impl Into<String>) -> Self {
        self.node_style = style.into();
        self
    }
}

/// Render with the default node style.
pub fn render_graph(nodes: &[RenderNode], edges: &[RenderEdge]) -> String {
    render_graph_with_options(nodes, edges, &RenderOptions::default())
}

/// Render nodes and edges as a `strict digraph`.
///
/// Nodes sort by label, edges by source label then target label; within
/// one assembly pass labels are unique per identity, so the ordering is
/// total and the output byte-identical across calls. Labels are quoted
/// verbatim; labels containing `"` are a documented limitation.
pub fn render_graph_with_options(
    nodes: &[RenderNode],
    edges: &[RenderEdge],
    options: &RenderOptions,
) -> String {
    let mut node_labels: Vec<&str> = nodes.iter().map(|node| node.label.as_str()).collect();
    node_labels.sort_unstable();

    let mut edge_labels: Vec<(&str, &str)> = edges
        .iter()
        .map(|edge| (edge.source.as_str(), edge.target.as_str()))
        .collect();
    edge_labels.sort_unstable();

    let mut output = String::with_capacity(64 + 32 * (nodes.len() + edges.len()));
    output.push_str("strict digraph {\n");
    for label in node_labels {
        let _ = writeln!(output, "  \"{label}\" {};", options.node_style);
    }
    for (source, target) in edge_labels {
        let _ = writeln!(output, "  \"{source}\" -> \"{target}\"");
    }
    output.push_str("}\n");

    tracing::debug!(bytes = output.len(), "rendered dot graph");
    output
}

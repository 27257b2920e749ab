//! # wiregraph-dot
//!
//! DOT serialization of assembled graphs.
//!
//! Output is a `strict digraph`: the sorted node block, then the sorted
//! edge block, each interior line indented two spaces. Node lines are
//! `;`-terminated, edge lines are not.

mod dot;

pub use dot::{DEFAULT_NODE_STYLE, RenderOptions, render_graph, render_graph_with_options};

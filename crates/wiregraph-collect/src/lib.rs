//! Node and edge assembly for graph rendering.
//!
//! This crate turns the raw pair list produced by relation discovery into
//! format-agnostic, labeled nodes and edges that renderers (DOT today)
//! consume.
//!
//! # Module Structure
//!
//! - [`types`]: core types ([`RenderNode`], [`RenderEdge`])
//! - [`index`]: per-type instance numbering ([`InstanceIndex`])
//! - [`label`]: display-label construction
//! - [`assemble`]: pipeline orchestration

mod assemble;
mod index;
mod label;
mod types;

pub use assemble::{assemble_graph, collect_nodes};
pub use index::{InstanceIndex, build_index};
pub use label::node_label;
pub use types::{RenderEdge, RenderNode};

//! Core types for graph rendering.

use std::hash::{Hash, Hasher};

use wiregraph_core::ObjectId;

/// A graph node ready for rendering.
///
/// Equality and hashing go by the underlying object identity, never by
/// label: two nodes are the same node exactly when they refer to the same
/// object.
#[derive(Debug, Clone)]
pub struct RenderNode {
    pub id: ObjectId,
    pub label: String,
}

impl PartialEq for RenderNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RenderNode {}

impl Hash for RenderNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A directed edge meaning "source holds / depends on target".
///
/// Endpoint labels are carried alongside the identities so renderers never
/// re-derive them; within one assembly pass the same identity always
/// carries the same label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEdge {
    pub source_id: ObjectId,
    pub target_id: ObjectId,
    pub source: String,
    pub target: String,
}

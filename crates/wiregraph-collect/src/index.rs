//! Per-type instance numbering.

use std::collections::HashMap;

use wiregraph_core::{ObjectId, ObjectRef, simple_type_name};

/// Ordinal numbering of graph objects within their type partition.
///
/// Maps each object identity to `(position, total)` where `total` is the
/// number of distinct instances sharing the object's display name and
/// `position` ranges over `1..=total`. Built once per render call and
/// reused for the node list and every edge endpoint.
#[derive(Debug, Default)]
pub struct InstanceIndex {
    slots: HashMap<ObjectId, (usize, usize)>,
}

impl InstanceIndex {
    /// Look up `(position, total)` for an object identity.
    pub fn get(&self, id: ObjectId) -> Option<(usize, usize)> {
        self.slots.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Build the instance index over an identity-distinct node sequence.
///
/// Positions follow the input order within each type partition, so the
/// index is deterministic for a given sequence. Callers are responsible
/// for deduplication; feeding the same identity twice is a contract
/// breach (debug-asserted).
pub fn build_index(nodes: &[ObjectRef<'_>]) -> InstanceIndex {
    let mut groups: HashMap<&str, Vec<ObjectId>> = HashMap::new();
    for node in nodes {
        groups
            .entry(simple_type_name(node.type_name()))
            .or_default()
            .push(node.id());
    }

    let mut slots = HashMap::with_capacity(nodes.len());
    for members in groups.values() {
        let total = members.len();
        for (i, id) in members.iter().enumerate() {
            let previous = slots.insert(*id, (i + 1, total));
            debug_assert!(previous.is_none(), "duplicate identity in index input");
        }
    }

    InstanceIndex { slots }
}

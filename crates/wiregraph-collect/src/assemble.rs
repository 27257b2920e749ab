//! Pipeline orchestration: raw pair list to labeled nodes and edges.

use std::collections::{HashMap, HashSet};

use wiregraph_core::{ObjectFilter, ObjectRef, RelationDiscovery};
use wiregraph_error::Result;

use crate::index::build_index;
use crate::label::node_label;
use crate::types::{RenderEdge, RenderNode};

/// Deduplicate pair endpoints into a node sequence, by identity, in order
/// of first appearance.
pub fn collect_nodes<'g>(pairs: &[(ObjectRef<'g>, ObjectRef<'g>)]) -> Vec<ObjectRef<'g>> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    for &(source, target) in pairs {
        for endpoint in [source, target] {
            if seen.insert(endpoint.id()) {
                nodes.push(endpoint);
            }
        }
    }
    nodes
}

/// Assemble the renderable graph reachable from `root`.
///
/// Asks the discovery collaborator for the raw pair list, derives the
/// distinct node set from the pair endpoints, numbers instances per type,
/// labels everything through one shared index, and deduplicates edges by
/// endpoint identity. Discovery failures propagate unchanged; there is no
/// recovery and no retry.
#[tracing::instrument(skip_all)]
pub fn assemble_graph<'g, D>(
    root: ObjectRef<'g>,
    filter: &ObjectFilter,
    discovery: &D,
) -> Result<(Vec<RenderNode>, Vec<RenderEdge>)>
where
    D: RelationDiscovery<'g> + ?Sized,
{
    let pairs = discovery.discover(root, filter)?;

    let node_refs = collect_nodes(&pairs);
    let index = build_index(&node_refs);

    let mut labels: HashMap<_, _> = HashMap::with_capacity(node_refs.len());
    let mut nodes = Vec::with_capacity(node_refs.len());
    for node in &node_refs {
        let label = node_label(*node, &index)?;
        labels.insert(node.id(), label.clone());
        nodes.push(RenderNode {
            id: node.id(),
            label,
        });
    }

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for (source, target) in &pairs {
        if !seen.insert((source.id(), target.id())) {
            continue;
        }
        edges.push(RenderEdge {
            source_id: source.id(),
            target_id: target.id(),
            source: labels[&source.id()].clone(),
            target: labels[&target.id()].clone(),
        });
    }

    tracing::debug!(
        pairs = pairs.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "assembled graph"
    );
    Ok((nodes, edges))
}

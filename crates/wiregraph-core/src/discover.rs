//! Relation discovery: deriving the dependency edge set from a root object.

use std::collections::{HashSet, VecDeque};

use wiregraph_error::Result;

use crate::filter::ObjectFilter;
use crate::object::ObjectRef;

/// The collaborator that produces the raw dependency relation.
///
/// Implementations must terminate with a finite pair sequence for any input
/// they accept, and must return only pairs whose endpoints both satisfy the
/// filter. Duplicate pairs are allowed; downstream assembly deduplicates.
///
/// Failures propagate unchanged through the rendering pipeline; no stage
/// retries or masks them.
pub trait RelationDiscovery<'g> {
    /// Produce every (holder, held) pair reachable from `root`.
    fn discover(
        &self,
        root: ObjectRef<'g>,
        filter: &ObjectFilter,
    ) -> Result<Vec<(ObjectRef<'g>, ObjectRef<'g>)>>;
}

/// Breadth-first walker over `GraphObject::dependencies`.
///
/// Each object is expanded once, keyed by identity, so the walk terminates
/// on any finite object graph, cyclic or not. A rejected object is pruned
/// together with its subtree; a rejected root yields no pairs. Self-pairs
/// are skipped.
#[derive(Debug, Default)]
pub struct DependencyWalker;

impl DependencyWalker {
    pub fn new() -> Self {
        Self
    }
}

impl<'g> RelationDiscovery<'g> for DependencyWalker {
    #[tracing::instrument(skip_all)]
    fn discover(
        &self,
        root: ObjectRef<'g>,
        filter: &ObjectFilter,
    ) -> Result<Vec<(ObjectRef<'g>, ObjectRef<'g>)>> {
        let mut pairs = Vec::new();

        if !filter.accepts(root) {
            tracing::trace!(root = %root.id(), "root rejected by filter");
            return Ok(pairs);
        }

        let mut visited: HashSet<_> = [root.id()].into();
        let mut queue = VecDeque::from([root]);

        while let Some(source) = queue.pop_front() {
            for target in source.dependencies() {
                if target.id() == source.id() {
                    tracing::trace!(object = %source.id(), "self-pair skipped");
                    continue;
                }
                if !filter.accepts(target) {
                    tracing::trace!(object = %target.id(), "pruned by filter");
                    continue;
                }
                pairs.push((source, target));
                if visited.insert(target.id()) {
                    queue.push_back(target);
                } else {
                    tracing::trace!(object = %target.id(), "already visited");
                }
            }
        }

        tracing::debug!(pairs = pairs.len(), "dependency walk finished");
        Ok(pairs)
    }
}

/// Adapter over a precomputed pair list.
///
/// Applies the endpoint filter and ignores the root argument; useful for
/// tests and for callers that derive the relation elsewhere.
pub struct StaticRelation<'g> {
    pairs: Vec<(ObjectRef<'g>, ObjectRef<'g>)>,
}

impl<'g> StaticRelation<'g> {
    pub fn new(pairs: Vec<(ObjectRef<'g>, ObjectRef<'g>)>) -> Self {
        Self { pairs }
    }
}

impl<'g> RelationDiscovery<'g> for StaticRelation<'g> {
    fn discover(
        &self,
        _root: ObjectRef<'g>,
        filter: &ObjectFilter,
    ) -> Result<Vec<(ObjectRef<'g>, ObjectRef<'g>)>> {
        Ok(self
            .pairs
            .iter()
            .copied()
            .filter(|(source, target)| filter.accepts(*source) && filter.accepts(*target))
            .collect())
    }
}

//! Reference store: arena of references indexed by source node

use crate::node_id::{NodeId, ObjectId};
use crate::reference::ReferenceDescription;
use std::collections::{BTreeSet, HashMap};

/// Multi-valued mapping from source node to its references
///
/// References live in one backing vector in insertion order; `by_source`
/// maps each source to the arena positions of its references. Nothing is
/// deduplicated or validated, so dangling targets are allowed.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    arena: Vec<(NodeId, ReferenceDescription)>,
    by_source: HashMap<NodeId, Vec<usize>>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reference from `source`
    pub fn insert(&mut self, source: NodeId, reference: ReferenceDescription) {
        let position = self.arena.len();
        self.by_source.entry(source.clone()).or_default().push(position);
        self.arena.push((source, reference));
    }

    /// References from `source` in insertion order; empty for unknown nodes
    pub fn references_from<'a>(
        &'a self,
        source: &NodeId,
    ) -> impl Iterator<Item = &'a ReferenceDescription> + 'a {
        self.by_source
            .get(source)
            .map(|positions| positions.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.arena[i].1)
    }

    /// Every `(source, reference)` pair in global insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &ReferenceDescription)> {
        self.arena.iter().map(|(source, reference)| (source, reference))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Transitive `HasSubtype` closure of `seed`, seeds included
    ///
    /// Fixed-point iteration over a visited set: each pass follows the
    /// `HasSubtype` references of the newly found nodes only, and stops when a
    /// pass finds nothing new. Cycles in the data cannot loop forever because
    /// a node enters the frontier at most once.
    pub fn select_nodes_hierarchy<I>(&self, seed: I) -> BTreeSet<NodeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let has_subtype = NodeId::from(ObjectId::HasSubtype);
        let mut visited: BTreeSet<NodeId> = seed.into_iter().collect();
        let mut frontier: Vec<NodeId> = visited.iter().cloned().collect();
        let mut passes = 0usize;

        while !frontier.is_empty() {
            passes += 1;
            let mut discovered = Vec::new();

            for node in &frontier {
                for reference in self.references_from(node) {
                    if reference.reference_type_id == has_subtype
                        && visited.insert(reference.node_id.clone())
                    {
                        discovered.push(reference.node_id.clone());
                    }
                }
            }

            tracing::trace!(
                "Subtype closure pass {}: {} new, {} total",
                passes,
                discovered.len(),
                visited.len()
            );
            frontier = discovered;
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_class::NodeClass;

    fn subtype(target: NodeId) -> ReferenceDescription {
        ReferenceDescription::new(ObjectId::HasSubtype, target, "sub", NodeClass::ReferenceType)
    }

    fn n(v: u32) -> NodeId {
        NodeId::numeric(1, v)
    }

    #[test]
    fn test_references_from_preserves_insertion_order() {
        let mut store = ReferenceStore::new();
        store.insert(n(1), subtype(n(10)));
        store.insert(n(2), subtype(n(20)));
        store.insert(n(1), subtype(n(11)));
        store.insert(n(1), subtype(n(10)));

        let targets: Vec<NodeId> = store.references_from(&n(1)).map(|r| r.node_id.clone()).collect();
        assert_eq!(targets, vec![n(10), n(11), n(10)]);
        assert_eq!(store.len(), 4);
        assert_eq!(store.references_from(&n(2)).count(), 1);
    }

    #[test]
    fn test_unknown_source_is_empty() {
        let store = ReferenceStore::new();
        assert_eq!(store.references_from(&n(99)).count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_dangling_targets_are_kept() {
        let mut store = ReferenceStore::new();
        store.insert(n(1), subtype(NodeId::string(7, "nowhere")));
        assert_eq!(store.references_from(&n(1)).count(), 1);
        assert_eq!(store.references_from(&NodeId::string(7, "nowhere")).count(), 0);
    }

    #[test]
    fn test_hierarchy_follows_subtype_only() {
        let mut store = ReferenceStore::new();
        store.insert(n(1), subtype(n(2)));
        store.insert(n(2), subtype(n(3)));
        store.insert(
            n(1),
            ReferenceDescription::new(ObjectId::Organizes, n(9), "other", NodeClass::Object),
        );

        let closure = store.select_nodes_hierarchy([n(1)]);
        assert_eq!(closure, BTreeSet::from([n(1), n(2), n(3)]));
    }

    #[test]
    fn test_hierarchy_terminates_on_cycle() {
        let mut store = ReferenceStore::new();
        store.insert(n(1), subtype(n(2)));
        store.insert(n(2), subtype(n(1)));
        store.insert(n(2), subtype(n(2)));

        let closure = store.select_nodes_hierarchy([n(1)]);
        assert_eq!(closure, BTreeSet::from([n(1), n(2)]));
    }

    #[test]
    fn test_hierarchy_is_idempotent() {
        let mut store = ReferenceStore::new();
        store.insert(n(1), subtype(n(2)));
        store.insert(n(1), subtype(n(3)));
        store.insert(n(3), subtype(n(4)));
        store.insert(n(4), subtype(n(1)));

        let once = store.select_nodes_hierarchy([n(3)]);
        let twice = store.select_nodes_hierarchy(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 4);
    }

    #[test]
    fn test_hierarchy_of_leaf_is_itself() {
        let store = ReferenceStore::new();
        assert_eq!(store.select_nodes_hierarchy([n(5)]), BTreeSet::from([n(5)]));
    }
}

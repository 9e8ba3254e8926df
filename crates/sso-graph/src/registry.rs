//! Entity registry: canonical node identity and attribute indexing.
//!
//! The registry backs all cross-reference resolution. It maps
//! `(namespace, local name)` pairs to their interned node, tracks the
//! entity class assigned to each minted node, and maintains a secondary
//! index `(class, attribute, value) -> node` built incrementally as
//! attributes are recorded. Lookups are O(1); the source converter
//! re-scanned every statement per reference instead.

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, Iri};
use crate::ids::NodeId;
use crate::vocab::Ns;

#[derive(Debug, Clone, Copy)]
enum IndexEntry {
    Unique(NodeId),
    /// Number of distinct nodes that recorded this value.
    Ambiguous(usize),
}

/// Registry of interned nodes, entity classes, and indexed attributes.
///
/// Growth-only: nothing is ever removed.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    by_name: HashMap<(Ns, String), NodeId>,
    class_of: HashMap<NodeId, &'static str>,
    attr_index: HashMap<(&'static str, &'static str, String), IndexEntry>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `(ns, local)`, interning it if needed.
    ///
    /// Idempotent: a second call with the same pair returns the same ID.
    /// Used for vocabulary terms (classes, predicates, datatypes) where
    /// re-mention is normal.
    pub fn create_or_get(&mut self, graph: &mut Graph, ns: Ns, local: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(&(ns, local.to_string())) {
            return id;
        }
        let id = graph.add_node(Iri::new(ns, local));
        self.by_name.insert((ns, local.to_string()), id);
        id
    }

    /// Intern a node for a new entity, tagging it with its class.
    ///
    /// Fails with `DuplicateName` if the instance name is already taken,
    /// by any class: the shared instance namespace offers no way to keep
    /// two same-named entities apart.
    pub fn mint(
        &mut self,
        graph: &mut Graph,
        ns: Ns,
        local: &str,
        class: &'static str,
    ) -> GraphResult<NodeId> {
        if let Some(&existing) = self.by_name.get(&(ns, local.to_string())) {
            return Err(GraphError::DuplicateName {
                name: local.to_string(),
                class,
                existing: self.class_of.get(&existing).copied().unwrap_or("unknown"),
            });
        }
        let id = graph.add_node(Iri::new(ns, local));
        self.by_name.insert((ns, local.to_string()), id);
        self.class_of.insert(id, class);
        Ok(id)
    }

    /// The entity class a node was minted with, if any.
    pub fn class_of(&self, node: NodeId) -> Option<&'static str> {
        self.class_of.get(&node).copied()
    }

    /// Look up an already-interned node without creating it.
    pub fn lookup(&self, ns: Ns, local: &str) -> Option<NodeId> {
        self.by_name.get(&(ns, local.to_string())).copied()
    }

    /// Record a string attribute of a minted node into the secondary
    /// index. Nodes without a class (vocabulary terms) are not indexed.
    pub fn record_attribute(&mut self, node: NodeId, attribute: &'static str, value: &str) {
        let Some(&class) = self.class_of.get(&node) else {
            return;
        };
        self.attr_index
            .entry((class, attribute, value.to_string()))
            .and_modify(|entry| {
                *entry = match *entry {
                    IndexEntry::Unique(existing) if existing == node => IndexEntry::Unique(existing),
                    IndexEntry::Unique(_) => IndexEntry::Ambiguous(2),
                    IndexEntry::Ambiguous(n) => IndexEntry::Ambiguous(n + 1),
                };
            })
            .or_insert(IndexEntry::Unique(node));
    }

    /// Find the unique node of `class` whose `attribute` equals `value`.
    ///
    /// Returns `Ok(None)` on no match (the caller decides how to report
    /// it) and `AmbiguousLookup` if more than one node matched; the
    /// source converter silently kept the last match instead.
    pub fn find_by_attribute(
        &self,
        class: &'static str,
        attribute: &'static str,
        value: &str,
    ) -> GraphResult<Option<NodeId>> {
        match self
            .attr_index
            .get(&(class, attribute, value.to_string()))
        {
            None => Ok(None),
            Some(IndexEntry::Unique(id)) => Ok(Some(*id)),
            Some(IndexEntry::Ambiguous(count)) => Err(GraphError::AmbiguousLookup {
                class,
                attribute,
                value: value.to_string(),
                count: *count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::class;

    #[test]
    fn create_or_get_is_idempotent() {
        let mut graph = Graph::new();
        let mut registry = EntityRegistry::new();

        let a = registry.create_or_get(&mut graph, Ns::Sso, "Material");
        let b = registry.create_or_get(&mut graph, Ns::Sso, "Material");
        assert_eq!(a, b);
        assert_eq!(graph.nodes().len(), 1);

        // Same local name in a different namespace is a different node.
        let c = registry.create_or_get(&mut graph, Ns::Inst, "Material");
        assert_ne!(a, c);
    }

    #[test]
    fn mint_rejects_duplicate_names_across_classes() {
        let mut graph = Graph::new();
        let mut registry = EntityRegistry::new();

        registry
            .mint(&mut graph, Ns::Inst, "Steel", class::MATERIAL)
            .unwrap();
        let err = registry
            .mint(&mut graph, Ns::Inst, "Steel", class::SECTION)
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateName {
                name: "Steel".into(),
                class: class::SECTION,
                existing: class::MATERIAL,
            }
        );
    }

    #[test]
    fn attribute_index_unique_hit() {
        let mut graph = Graph::new();
        let mut registry = EntityRegistry::new();

        let steel = registry
            .mint(&mut graph, Ns::Inst, "Steel", class::MATERIAL)
            .unwrap();
        registry.record_attribute(steel, "material_name", "Steel");

        assert_eq!(
            registry
                .find_by_attribute(class::MATERIAL, "material_name", "Steel")
                .unwrap(),
            Some(steel)
        );
        assert_eq!(
            registry
                .find_by_attribute(class::MATERIAL, "material_name", "Missing")
                .unwrap(),
            None
        );
        // Class is part of the key.
        assert_eq!(
            registry
                .find_by_attribute(class::SECTION, "material_name", "Steel")
                .unwrap(),
            None
        );
    }

    #[test]
    fn attribute_index_detects_ambiguity() {
        let mut graph = Graph::new();
        let mut registry = EntityRegistry::new();

        let a = registry
            .mint(&mut graph, Ns::Inst, "SecA", class::SECTION)
            .unwrap();
        let b = registry
            .mint(&mut graph, Ns::Inst, "SecB", class::SECTION)
            .unwrap();
        // Two sections recording the same type value is fine for
        // non-lookup attributes, but a lookup on it must fail loudly.
        registry.record_attribute(a, "section_type", "BOX");
        registry.record_attribute(b, "section_type", "BOX");

        let err = registry
            .find_by_attribute(class::SECTION, "section_type", "BOX")
            .unwrap_err();
        assert!(matches!(err, GraphError::AmbiguousLookup { count: 2, .. }));
    }

    #[test]
    fn recording_same_node_twice_stays_unique() {
        let mut graph = Graph::new();
        let mut registry = EntityRegistry::new();

        let a = registry
            .mint(&mut graph, Ns::Inst, "A", class::OBJECT)
            .unwrap();
        registry.record_attribute(a, "object_name", "A");
        registry.record_attribute(a, "object_name", "A");

        assert_eq!(
            registry
                .find_by_attribute(class::OBJECT, "object_name", "A")
                .unwrap(),
            Some(a)
        );
    }
}

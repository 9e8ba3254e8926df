//! Core graph data structures.
//!
//! The graph is an append-only statement store: nodes are interned IRIs,
//! statements are subject-predicate-object triples in creation order.
//! Nothing is ever removed or mutated after creation, and serialization
//! order is defined to be creation order.

use crate::ids::NodeId;
use crate::vocab::Ns;

/// An IRI split into a registered namespace and a local name.
///
/// The local name may be empty (the namespace IRI itself, used by the
/// ontology header).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri {
    pub ns: Ns,
    pub local: String,
}

impl Iri {
    pub fn new(ns: Ns, local: impl Into<String>) -> Self {
        Self {
            ns,
            local: local.into(),
        }
    }

    /// The full expanded IRI.
    pub fn full(&self) -> String {
        format!("{}{}", self.ns.iri(), self.local)
    }
}

/// Object position of a statement: a node reference or a typed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Node(NodeId),
    /// `xsd:string` literal.
    Str(String),
    /// `xsd:integer` literal.
    Int(i64),
    /// `xsd:boolean` literal.
    Bool(bool),
}

/// One subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: NodeId,
    pub predicate: NodeId,
    pub object: Term,
}

/// The finished graph: interned IRI nodes plus statements in creation order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Iri>,
    pub(crate) statements: Vec<Statement>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a new node and return its ID. Deduplication is the
    /// registry's job; the graph itself is a plain arena.
    pub(crate) fn add_node(&mut self, iri: Iri) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(iri);
        id
    }

    /// Append a statement.
    pub(crate) fn add_statement(&mut self, subject: NodeId, predicate: NodeId, object: Term) {
        self.statements.push(Statement {
            subject,
            predicate,
            object,
        });
    }

    /// Get a node's IRI by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Iri> {
        self.nodes.get(id.index() as usize)
    }

    /// Return all interned nodes.
    pub fn nodes(&self) -> &[Iri] {
        &self.nodes
    }

    /// Return all statements in creation order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Statements whose subject is the given node, in creation order.
    pub fn statements_about(&self, subject: NodeId) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(move |s| s.subject == subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_full_concatenates() {
        let iri = Iri::new(Ns::Inst, "Beam_1");
        assert_eq!(
            iri.full(),
            "http://www.upclabmodelsdigitals.org/Models/OSAM/Beam_1"
        );

        // Empty local name yields the bare namespace IRI.
        let header = Iri::new(Ns::Sso, "");
        assert_eq!(header.full(), Ns::Sso.iri());
    }

    #[test]
    fn statements_preserve_creation_order() {
        let mut graph = Graph::new();
        let a = graph.add_node(Iri::new(Ns::Inst, "a"));
        let p = graph.add_node(Iri::new(Ns::Sso, "name"));
        graph.add_statement(a, p, Term::Str("first".into()));
        graph.add_statement(a, p, Term::Int(2));
        graph.add_statement(a, p, Term::Bool(true));

        let objects: Vec<_> = graph.statements().iter().map(|s| &s.object).collect();
        assert_eq!(
            objects,
            vec![
                &Term::Str("first".into()),
                &Term::Int(2),
                &Term::Bool(true)
            ]
        );
    }

    #[test]
    fn statements_about_filters_by_subject() {
        let mut graph = Graph::new();
        let a = graph.add_node(Iri::new(Ns::Inst, "a"));
        let b = graph.add_node(Iri::new(Ns::Inst, "b"));
        let p = graph.add_node(Iri::new(Ns::Sso, "name"));
        graph.add_statement(a, p, Term::Str("a".into()));
        graph.add_statement(b, p, Term::Str("b".into()));
        graph.add_statement(a, p, Term::Node(b));

        assert_eq!(graph.statements_about(a).count(), 2);
        assert_eq!(graph.statements_about(b).count(), 1);
    }
}

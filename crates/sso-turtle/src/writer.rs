//! Turtle writer.

use std::fmt::Write as _;
use std::path::Path;

use sso_graph::{Graph, Iri, NodeId, Ns, Term};

use crate::{TurtleError, TurtleResult};

/// Serialize the graph to a Turtle string.
///
/// Prefixes are bound in a fixed order, then one statement per line in
/// creation order. `rdf:type` is written as `a`; all literals carry an
/// explicit datatype.
pub fn write_string(graph: &Graph) -> TurtleResult<String> {
    let mut out = String::new();
    for ns in Ns::ALL {
        let _ = writeln!(out, "@prefix {}: <{}> .", ns.prefix(), ns.iri());
    }
    out.push('\n');

    for stmt in graph.statements() {
        let subject = render_node(graph, stmt.subject)?;
        let predicate = render_predicate(graph, stmt.predicate)?;
        let object = render_term(graph, &stmt.object)?;
        let _ = writeln!(out, "{} {} {} .", subject, predicate, object);
    }
    Ok(out)
}

/// Serialize the graph to a file.
pub fn write_to_file(path: &Path, graph: &Graph) -> TurtleResult<()> {
    let content = write_string(graph)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn resolve(graph: &Graph, id: NodeId) -> TurtleResult<&Iri> {
    graph
        .node(id)
        .ok_or(TurtleError::DanglingNode { index: id.index() })
}

fn render_node(graph: &Graph, id: NodeId) -> TurtleResult<String> {
    Ok(render_iri(resolve(graph, id)?))
}

fn render_predicate(graph: &Graph, id: NodeId) -> TurtleResult<String> {
    let iri = resolve(graph, id)?;
    if iri.ns == Ns::Rdf && iri.local == "type" {
        return Ok("a".to_string());
    }
    Ok(render_iri(iri))
}

fn render_term(graph: &Graph, term: &Term) -> TurtleResult<String> {
    Ok(match term {
        Term::Node(id) => render_node(graph, *id)?,
        Term::Str(s) => format!("\"{}\"^^xsd:string", escape_literal(s)),
        Term::Int(i) => format!("\"{}\"^^xsd:integer", i),
        Term::Bool(b) => format!("\"{}\"^^xsd:boolean", b),
    })
}

/// Prefixed form when the local name is Turtle-safe, otherwise a full
/// IRI reference.
fn render_iri(iri: &Iri) -> String {
    if is_pn_local(&iri.local) {
        format!("{}:{}", iri.ns.prefix(), iri.local)
    } else {
        format!("<{}>", escape_iri(&iri.full()))
    }
}

/// Conservative subset of Turtle's PN_LOCAL production. An empty local
/// name is fine (`sso:` is the namespace node itself).
fn is_pn_local(local: &str) -> bool {
    if local.is_empty() {
        return true;
    }
    let first = local.chars().next().unwrap_or(' ');
    if !(first.is_ascii_alphanumeric() || first == '_') {
        return false;
    }
    if local.ends_with('.') {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Escape a string literal body.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode characters an IRIREF may not contain.
fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        if c.is_ascii()
            && (c <= ' ' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
        {
            let _ = write!(out, "%{:02X}", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}

//! Foreign-key resolution.
//!
//! Translates a reference from one document section into the node created
//! for the referenced entity in an earlier section. Callers must only
//! resolve against sections that have already been materialized; the
//! build is a single forward pass with no deferred reconciliation.

use crate::error::{GraphError, GraphResult};
use crate::ids::NodeId;
use crate::registry::EntityRegistry;

/// Resolve a numeric foreign key.
///
/// Finds the candidate record whose id equals `source_id`, extracts its
/// name, and looks up the node indexed under `(target_class,
/// name_attribute, name)`. `section` and `index` identify the referencing
/// record for error reporting.
pub fn resolve_id<R>(
    registry: &EntityRegistry,
    section: &'static str,
    index: usize,
    target_class: &'static str,
    name_attribute: &'static str,
    source_id: i64,
    candidates: &[R],
    id_of: impl Fn(&R) -> i64,
    name_of: impl Fn(&R) -> &str,
) -> GraphResult<NodeId> {
    let Some(candidate) = candidates.iter().find(|r| id_of(r) == source_id) else {
        return Err(GraphError::UnresolvedReference {
            section,
            index,
            target: target_class,
            key: source_id.to_string(),
        });
    };
    resolve_name(
        registry,
        section,
        index,
        target_class,
        name_attribute,
        name_of(candidate),
    )
}

/// Resolve a by-name foreign key via the attribute index.
pub fn resolve_name(
    registry: &EntityRegistry,
    section: &'static str,
    index: usize,
    target_class: &'static str,
    name_attribute: &'static str,
    name: &str,
) -> GraphResult<NodeId> {
    match registry.find_by_attribute(target_class, name_attribute, name)? {
        Some(node) => Ok(node),
        None => Err(GraphError::UnresolvedReference {
            section,
            index,
            target: target_class,
            key: name.to_string(),
        }),
    }
}

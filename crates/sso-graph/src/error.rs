//! Graph construction and lookup errors.
//!
//! All of these abort the conversion: there are no retries and no partial
//! output. The source converter silently produced null references on
//! lookup misses; here every miss is an explicit error carrying the
//! offending section, index, and key.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two entities claim the same name in the instance namespace. Names
    /// must be unique across classes as well as within one.
    #[error("Duplicate entity name '{name}': already used by a {existing} node (while adding {class})")]
    DuplicateName {
        name: String,
        class: &'static str,
        existing: &'static str,
    },

    /// A foreign key has no matching target.
    #[error("Unresolved reference in {section}[{index}]: no {target} matches '{key}'")]
    UnresolvedReference {
        section: &'static str,
        index: usize,
        target: &'static str,
        key: String,
    },

    /// More than one node matched a uniqueness-assumed attribute lookup.
    #[error("Ambiguous lookup: {count} {class} nodes share {attribute} = '{value}'")]
    AmbiguousLookup {
        class: &'static str,
        attribute: &'static str,
        value: String,
        count: usize,
    },
}

//! sso-model: OSAM document schema and loading.
//!
//! An OSAM document is a single JSON file describing a structural-analysis
//! model: materials, sections, meshed objects, an assembly with instances,
//! boundary conditions, load cases, and loads. Cross-references between
//! sections use numeric ids or names; resolving them is the job of
//! `sso-graph`, not this crate.

pub mod schema;

pub use schema::*;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse an OSAM document from a JSON string.
pub fn parse_str(content: &str) -> ModelResult<OsamDocument> {
    Ok(serde_json::from_str(content)?)
}

/// Load an OSAM document from a JSON file.
pub fn load_json(path: &std::path::Path) -> ModelResult<OsamDocument> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

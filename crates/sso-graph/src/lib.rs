//! sso-graph: typed graph layer for the OSAM-to-SSO conversion.
//!
//! Provides:
//! - Stable compact node identifiers (`NodeId`)
//! - The SSO vocabulary (namespaces, classes, predicates)
//! - An append-only statement store (`Graph`)
//! - An entity registry with an attribute index for cross-reference
//!   resolution
//! - The document-to-graph builder
//!
//! # Example
//!
//! ```
//! let doc = sso_model::parse_str(r#"{
//!     "name": "Demo", "id": "1",
//!     "assembly": { "name": "A" }
//! }"#).unwrap();
//! let graph = sso_graph::build_graph(&doc).unwrap();
//! assert!(!graph.statements().is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod ids;
pub mod registry;
pub mod resolve;
pub mod vocab;

// Re-exports for ergonomics
pub use builder::{ModelGraphBuilder, build_graph};
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, Iri, Statement, Term};
pub use ids::NodeId;
pub use registry::EntityRegistry;
pub use vocab::{ElementKind, Ns};

//! sso-turtle: Turtle serialization of the SSO graph.
//!
//! The writer is a pure function of the graph: statements are emitted in
//! creation order under a fixed prefix block, so identical graphs always
//! produce byte-identical output. The reader parses the emitted subset of
//! Turtle back into expanded triples; it exists for round-trip
//! verification, not as a general Turtle parser.

pub mod reader;
pub mod writer;

pub use reader::{ParsedTerm, Triple, parse};
pub use writer::{write_string, write_to_file};

pub type TurtleResult<T> = Result<T, TurtleError>;

#[derive(thiserror::Error, Debug)]
pub enum TurtleError {
    #[error("Serialization failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Statement references unknown node index {index}")]
    DanglingNode { index: u32 },

    #[error("Parse error at line {line}: {what}")]
    Parse { line: usize, what: String },

    #[error("Unknown prefix '{prefix}' at line {line}")]
    UnknownPrefix { prefix: String, line: usize },
}

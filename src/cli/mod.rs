//! CLI support for esdsl
//!
//! Browses the builder catalog and renders worked example payloads. Kept in
//! the library so the commands can be driven from tests or other tools.

pub mod catalog;
mod docs;
mod example;

pub use catalog::{CatalogEntry, ClauseCategory, Example};
pub use docs::{DocCategory, get_doc, get_docs_overview};
pub use example::{ExampleOptions, execute_example};

/// Errors that can occur during CLI operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No catalog entry or doc category with this name
    UnknownClause(String),
    /// A bare name that matches several entries
    AmbiguousClause {
        name: String,
        candidates: Vec<String>,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::UnknownClause(name) => {
                write!(f, "Unknown clause: '{}'\nRun 'esdsl docs' to see available clauses.", name)
            }
            CliError::AmbiguousClause { name, candidates } => {
                write!(f, "Ambiguous clause: '{}' could be {}", name, candidates.join(" or "))
            }
        }
    }
}

impl std::error::Error for CliError {}

//! # Core Types
//!
//! Shared type definitions for the sorter:
//! - Error type (`SortError`)
//!
//! ## Failure Guarantees
//!
//! Every error in this module is fatal to the invocation that produced it:
//! - No partial result is ever returned alongside an error
//! - Nothing is retried internally
//! - The sorter never panics; all failures surface as `Result`

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can abort a topological sort.
///
/// `V` is the caller's vertex type and `E` the caller-defined child lookup
/// failure, both taken from the `NodeProvider` implementation in use.
#[derive(Debug, Error)]
pub enum SortError<V, E> {
    /// No provider was supplied. Detected before any traversal begins,
    /// independent of the roots.
    #[error("node provider must be a valid reference")]
    InvalidProvider,

    /// A vertex was re-entered while still open: the graph is not a DAG.
    #[error("not a dag")]
    Cycle {
        /// The chain of open ancestors recorded by the branch that
        /// discovered the cycle, ending with the re-entered vertex.
        path: Vec<V>,
    },

    /// The provider could not resolve a requested child. The caller's
    /// failure is surfaced verbatim, never reinterpreted.
    #[error("child lookup failed")]
    ChildLookup(#[source] E),
}

impl<V, E> SortError<V, E> {
    /// Get the cyclic path if this error is a cycle report.
    #[must_use]
    pub fn cycle_path(&self) -> Option<&[V]> {
        match self {
            Self::Cycle { path } => Some(path),
            Self::InvalidProvider | Self::ChildLookup(_) => None,
        }
    }
}

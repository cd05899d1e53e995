//! # toposort-core
//!
//! A generic topological sort primitive over caller-defined directed
//! graphs - THE LOGIC.
//!
//! This crate implements one operation: given a capability object that can
//! identify vertices and enumerate their children, and a list of root
//! vertices, produce a dependency-respecting linear order (every child
//! precedes its parents) or report the cyclic path that makes such an
//! order impossible.
//!
//! ## Architectural Constraints
//!
//! The sorter:
//! - Owns no graph storage; it is meant to be embedded in tools that
//!   already hold their own vertex representation
//! - Never constructs, mutates, or persists graphs
//! - Keeps all traversal state local to a single invocation; a provider
//!   may be shared across independent invocations
//! - Has NO async, NO network dependencies (pure Rust)
//! - Performs no logging and no retries; every failure is surfaced to the
//!   caller as a `Result`

// =============================================================================
// MODULES
// =============================================================================

pub mod sort;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use sort::{NodeProvider, top_sort};
pub use types::SortError;

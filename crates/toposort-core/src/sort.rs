//! # Topological Sorter
//!
//! Depth-first topological sort over caller-defined graphs.
//!
//! This module implements the `NodeProvider` trait boundary and the
//! `top_sort` entry point. The sorter holds no graph data of its own:
//! every question about the graph (vertex identity, child counts, child
//! lookup) is delegated to the provider, so callers keep whatever vertex
//! representation they already have.
//!
//! ## Determinism Guarantees
//!
//! The produced order is a reverse postorder: children are appended before
//! their parents, and roots are processed left to right. Given a provider
//! whose child enumeration is deterministic, the output is deterministic.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::SortError;

// =============================================================================
// NODE PROVIDER TRAIT
// =============================================================================

/// The NodeProvider trait is the boundary between the vertices stored by
/// the caller and the sort.
///
/// Implementing it lets consumers run graph operations over their own data
/// structures without converting to a canonical node format beforehand.
/// The sorter treats the provider as read-only; one provider may serve any
/// number of independent invocations.
pub trait NodeProvider {
    /// The caller's vertex representation. Opaque to the sorter; it is
    /// only ever handed back to the provider.
    type Vertex: Clone;

    /// Identifier used to decide whether two vertices are the same node.
    /// Must be stable for a given vertex within one invocation.
    type Id: Eq + Hash + Clone;

    /// Caller-defined child lookup failure (broken reference, index out
    /// of range, ...).
    type Error: std::error::Error + 'static;

    /// Return the unique identifier for `vertex`.
    fn id(&self, vertex: &Self::Vertex) -> Self::Id;

    /// Return the number of children `vertex` has.
    fn child_count(&self, vertex: &Self::Vertex) -> usize;

    /// Return the child of `vertex` at `index`, valid for
    /// `0 <= index < child_count(vertex)`.
    fn child(&self, vertex: &Self::Vertex, index: usize) -> Result<Self::Vertex, Self::Error>;
}

// =============================================================================
// TRAVERSAL STATE
// =============================================================================

/// Visitation state for a single node, scoped to one sort invocation.
#[derive(Debug, Clone, Copy, Default)]
enum VisitState {
    /// Not reached yet.
    #[default]
    New,
    /// Currently on the traversal stack; re-entry means a cycle.
    Open,
    /// Fully processed and already appended to the result.
    Closed,
}

// =============================================================================
// TOPOLOGICAL SORT
// =============================================================================

/// Perform a topological sort of the graph reachable from `roots`.
///
/// Returns the reachable vertices in an order where every child precedes
/// its parents, or a `SortError` if the graph is not a DAG, the provider
/// is absent, or a child lookup fails. Each reachable vertex appears
/// exactly once, no matter how many parents share it. Any failure aborts
/// the whole call; there is no partial result.
///
/// Traversal state lives entirely inside this call, so repeated
/// invocations over an unchanged provider yield identical output.
///
/// Recursion depth equals the longest root-to-leaf path in the graph;
/// very deep graphs consume call stack proportional to that depth.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use toposort_core::{top_sort, NodeProvider, SortError};
///
/// /// Adjacency list over `usize` vertices; entry `v` lists what `v`
/// /// depends on.
/// struct Adjacency(Vec<Vec<usize>>);
///
/// impl NodeProvider for Adjacency {
///     type Vertex = usize;
///     type Id = usize;
///     type Error = Infallible;
///
///     fn id(&self, vertex: &usize) -> usize {
///         *vertex
///     }
///
///     fn child_count(&self, vertex: &usize) -> usize {
///         self.0[*vertex].len()
///     }
///
///     fn child(&self, vertex: &usize, index: usize) -> Result<usize, Infallible> {
///         Ok(self.0[*vertex][index])
///     }
/// }
///
/// // 2 depends on 0 and 1; 1 depends on 0.
/// let graph = Adjacency(vec![vec![], vec![0], vec![0, 1]]);
/// let order = top_sort(Some(&graph), &[2])?;
/// assert_eq!(order, vec![0, 1, 2]);
/// # Ok::<(), SortError<usize, Infallible>>(())
/// ```
pub fn top_sort<P: NodeProvider>(
    provider: Option<&P>,
    roots: &[P::Vertex],
) -> Result<Vec<P::Vertex>, SortError<P::Vertex, P::Error>> {
    let Some(provider) = provider else {
        return Err(SortError::InvalidProvider);
    };

    let mut state: HashMap<P::Id, VisitState> = HashMap::new();
    let mut sorted = Vec::new();

    for root in roots {
        dfs_visit(provider, root.clone(), &mut state, &mut sorted, Vec::new())?;
    }

    Ok(sorted)
}

/// Depth-first visit of `vertex` and everything below it.
///
/// `path` is the chain of open ancestors for this branch, threaded by
/// value so that a cycle report carries the discovering branch's chain.
fn dfs_visit<P: NodeProvider>(
    provider: &P,
    vertex: P::Vertex,
    state: &mut HashMap<P::Id, VisitState>,
    sorted: &mut Vec<P::Vertex>,
    mut path: Vec<P::Vertex>,
) -> Result<(), SortError<P::Vertex, P::Error>> {
    let id = provider.id(&vertex);

    match state.get(&id).copied().unwrap_or_default() {
        VisitState::Open => {
            path.push(vertex);
            return Err(SortError::Cycle { path });
        }
        // Already fully processed by an earlier branch; shared
        // sub-dependencies are appended only once.
        VisitState::Closed => return Ok(()),
        VisitState::New => {}
    }

    state.insert(id.clone(), VisitState::Open);
    path.push(vertex.clone());

    for index in 0..provider.child_count(&vertex) {
        let child = provider
            .child(&vertex, index)
            .map_err(SortError::ChildLookup)?;
        dfs_visit(provider, child, state, sorted, path.clone())?;
    }

    state.insert(id, VisitState::Closed);
    sorted.push(vertex);
    Ok(())
}

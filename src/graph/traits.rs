use std::fmt::Debug;
use num_traits::Float;

use crate::graph::DirectedEdge;
use crate::{Error, Result};

/// Trait representing a weighted directed graph over vertices `0..vertex_count()`
///
/// Iterators returned here are lazy and finite; every call starts a fresh pass,
/// so callers may traverse the same adjacency as many times as they like.
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of `vertex` in insertion order
    fn adj(&self, vertex: usize) -> Result<Box<dyn Iterator<Item = &DirectedEdge<W>> + '_>>;

    /// Returns every edge, vertex by vertex, each in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = &DirectedEdge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    fn validate_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

/// Append-only graph construction; edges are never removed or re-weighted
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Appends `edge` to the adjacency of `edge.from()`
    fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<()>;
}

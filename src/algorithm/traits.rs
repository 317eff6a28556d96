use std::fmt::Debug;
use num_traits::Float;

use crate::graph::DirectedEdge;
use crate::Result;

/// Read-only view of a finished single-source shortest-path computation
///
/// This is the surface handed to presentation code; nothing behind it changes
/// once the computation has been constructed.
pub trait ShortestPaths<W>
where
    W: Float + Debug,
{
    /// The source vertex of this computation
    fn source(&self) -> usize;

    /// Number of vertices covered by the computation
    fn vertex_count(&self) -> usize;

    /// Length of the shortest path to `vertex`, `W::infinity()` when unreachable
    fn dist_to(&self, vertex: usize) -> Result<W>;

    /// Returns true if `vertex` is reachable from the source
    fn has_path_to(&self, vertex: usize) -> Result<bool> {
        Ok(self.dist_to(vertex)? < W::infinity())
    }

    /// Edges of a shortest path from the source to `vertex`, in travel order
    ///
    /// `None` when `vertex` is unreachable; an empty path for the source itself.
    /// Each call builds a fresh `Vec`.
    fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>>;
}

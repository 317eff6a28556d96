use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::ShortestPaths;
use crate::data_structures::IndexMinPQ;
use crate::graph::{DirectedEdge, Graph};
use crate::{Error, Result};

/// Dijkstra's algorithm over an indexed min-priority queue
///
/// All work happens in [`DijkstraSP::new`]: once it returns, every reachable
/// vertex has been finalized and the distance and predecessor tables are
/// read-only. Each instance serves exactly one source vertex.
#[derive(Debug, Clone)]
pub struct DijkstraSP<W>
where
    W: Float + Debug,
{
    /// Source vertex ID
    source: usize,

    /// `dist_to[v]` is the length of a shortest path source -> v
    dist_to: Vec<W>,

    /// `edge_to[v]` is the last edge on a shortest path source -> v
    edge_to: Vec<Option<DirectedEdge<W>>>,
}

impl<W> DijkstraSP<W>
where
    W: Float + Debug,
{
    /// Computes a shortest-path tree from `source`
    ///
    /// Fails with [`Error::NegativeWeight`] before doing any other work if any
    /// edge weight is negative or NaN, and with [`Error::InvalidVertex`] if
    /// `source` is not a vertex of `graph`.
    pub fn new<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W>,
    {
        if let Some(edge) = graph.edges().find(|edge| edge.is_negative()) {
            return Err(Error::NegativeWeight {
                from: edge.from(),
                to: edge.to(),
                weight: edge.weight().to_f64().unwrap_or(f64::NAN),
            });
        }
        graph.validate_vertex(source)?;

        let n = graph.vertex_count();
        debug!("dijkstra: source {} over {} vertices, {} edges", source, n, graph.edge_count());

        let mut sp = DijkstraSP {
            source,
            dist_to: vec![W::infinity(); n],
            edge_to: vec![None; n],
        };
        sp.dist_to[source] = W::zero();

        let mut pq = IndexMinPQ::new(n);
        pq.insert(source, W::zero())?;

        let mut finalized = 0;
        while !pq.is_empty() {
            let v = pq.del_min()?;
            finalized += 1;
            for edge in graph.adj(v)? {
                sp.relax(edge, &mut pq)?;
            }
        }
        debug!("dijkstra: finalized {} of {} vertices", finalized, n);

        debug_assert!(sp.check(graph));
        Ok(sp)
    }

    /// Distance table indexed by vertex
    pub fn distances(&self) -> &[W] {
        &self.dist_to
    }

    fn relax(&mut self, edge: &DirectedEdge<W>, pq: &mut IndexMinPQ<W>) -> Result<()> {
        let v = edge.from();
        let w = edge.to();
        let candidate = self.dist_to[v] + edge.weight();
        if candidate < self.dist_to[w] {
            trace!("relax {}->{}: {:?} -> {:?}", v, w, self.dist_to[w], candidate);
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(*edge);
            if pq.contains(w)? {
                pq.decrease_key(w, candidate)?;
            } else {
                pq.insert(w, candidate)?;
            }
        }
        Ok(())
    }

    /// Verifies the optimality conditions of the finished tree:
    /// the source is at distance zero with no parent, no edge can still be
    /// relaxed, and every tree edge is tight.
    fn check<G>(&self, graph: &G) -> bool
    where
        G: Graph<W>,
    {
        if self.dist_to[self.source] != W::zero() || self.edge_to[self.source].is_some() {
            warn!("check: source {} has a parent or non-zero distance", self.source);
            return false;
        }

        for v in 0..self.dist_to.len() {
            if v != self.source && self.edge_to[v].is_none() && self.dist_to[v] != W::infinity() {
                warn!("check: vertex {} has a distance but no parent edge", v);
                return false;
            }
        }

        for edge in graph.edges() {
            if self.dist_to[edge.from()] + edge.weight() < self.dist_to[edge.to()] {
                warn!("check: edge {}->{} is still relaxable", edge.from(), edge.to());
                return false;
            }
        }

        for (w, edge) in self.edge_to.iter().enumerate() {
            if let Some(edge) = edge {
                if edge.to() != w || self.dist_to[edge.from()] + edge.weight() != self.dist_to[w] {
                    warn!("check: tree edge {}->{} is not tight", edge.from(), edge.to());
                    return false;
                }
            }
        }

        true
    }

    fn validate_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.dist_to.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.dist_to.len(),
            })
        }
    }
}

impl<W> ShortestPaths<W> for DijkstraSP<W>
where
    W: Float + Debug,
{
    fn source(&self) -> usize {
        self.source
    }

    fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    fn dist_to(&self, vertex: usize) -> Result<W> {
        self.validate_vertex(vertex)?;
        Ok(self.dist_to[vertex])
    }

    fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        if !self.has_path_to(vertex)? {
            return Ok(None);
        }

        // Walk parent edges back to the source, then flip into travel order
        let mut path = Vec::new();
        let mut current = vertex;
        while let Some(edge) = self.edge_to[current] {
            path.push(edge);
            current = edge.from();
        }
        path.reverse();

        Ok(Some(path))
    }
}

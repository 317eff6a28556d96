use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::DirectedEdge;
use crate::Result;
use num_traits::Float;
use std::fmt::Debug;

/// An edge-weighted digraph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Debug,
{
    /// Outgoing edges for each vertex, indexed by vertex id
    adjacency: Vec<Vec<DirectedEdge<W>>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Debug,
{
    /// Creates a new graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedDigraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, failing on the first
    /// triple that names a vertex outside `0..vertices`
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(DirectedEdge::new(from, to, weight))?;
        }
        Ok(graph)
    }
}

impl<W> Graph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn adj(&self, vertex: usize) -> Result<Box<dyn Iterator<Item = &DirectedEdge<W>> + '_>> {
        self.validate_vertex(vertex)?;
        Ok(Box::new(self.adjacency[vertex].iter()))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &DirectedEdge<W>> + '_> {
        Box::new(self.adjacency.iter().flat_map(|edges| edges.iter()))
    }
}

impl<W> MutableGraph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Debug,
{
    fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<()> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())?;

        // Parallel edges and self-loops are kept as given
        self.adjacency[edge.from()].push(edge);
        self.edge_count += 1;
        Ok(())
    }
}

use num_traits::Float;
use std::fmt;

/// An immutable weighted arc `from -> to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<W> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float,
{
    /// Creates a new edge. Range and sign checks happen when the edge is
    /// added to a graph and when an engine is built over it.
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Tail vertex
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// `true` for NaN and every weight below zero
    pub fn is_negative(&self) -> bool {
        !(self.weight >= W::zero())
    }
}

impl<W> fmt::Display for DirectedEdge<W>
where
    W: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

//! Dijkstra SP - single-source shortest paths over weighted digraphs
//!
//! The engine runs the classic greedy relaxation loop driven by an indexed
//! binary min-heap with decrease-key, giving O(E log V) time on directed graphs
//! with non-negative edge weights.
//!
//! The core (`graph`, `data_structures`, `algorithm`) performs no I/O. Loading
//! edge lists and city names lives in `io`, formatting results in `report`.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

pub use algorithm::{dijkstra::DijkstraSP, ShortestPaths};
pub use data_structures::IndexMinPQ;
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, EdgeWeightedDigraph};

/// Why the priority queue rejected an index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// Index is not in `[0, capacity)`
    OutOfRange { capacity: usize },
    /// `insert` on an index already in the queue
    AlreadyPresent,
    /// `decrease_key` on an index not in the queue
    NotPresent,
    /// `decrease_key` with a key that is not strictly smaller
    KeyNotDecreased,
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::OutOfRange { capacity } => {
                write!(f, "not between 0 and {}", capacity.saturating_sub(1))
            }
            IndexError::AlreadyPresent => write!(f, "already in the priority queue"),
            IndexError::NotPresent => write!(f, "not in the priority queue"),
            IndexError::KeyNotDecreased => write!(f, "key is not strictly less than the current key"),
        }
    }
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("edge {from}->{to} has negative weight {weight}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("index {index} is {reason}")]
    InvalidIndex { index: usize, reason: IndexError },

    #[error("priority queue underflow")]
    EmptyQueue,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("edge list has no header line")]
    MissingHeader,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

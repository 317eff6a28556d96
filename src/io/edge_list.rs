use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, warn};

use crate::graph::{DirectedEdge, EdgeWeightedDigraph, Graph, MutableGraph};
use crate::io::parse_field;
use crate::{Error, Result};

/// Largest vertex count accepted from a header; the graph allocates one
/// adjacency list per vertex up front
pub const MAX_VERTICES: usize = 1 << 24;

/// First line of an edge-list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeListHeader {
    pub vertices: usize,
    pub source: usize,
    pub destination: Option<usize>,
}

/// A loaded edge list: the graph plus the query named in its header
#[derive(Debug, Clone)]
pub struct EdgeListFile {
    pub header: EdgeListHeader,
    pub graph: EdgeWeightedDigraph<f64>,
}

/// Reads an edge list from any buffered reader
///
/// Vertex ids are checked against the header's vertex count. Weights are taken
/// as written; negative weights are left for the engine to reject.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeListFile> {
    let mut header: Option<EdgeListHeader> = None;
    let mut graph = EdgeWeightedDigraph::new(0);

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            warn!("edge list: skipping blank line {}", line_no);
            continue;
        }

        if header.is_none() {
            let parsed = parse_header(&tokens, line_no)?;
            graph = EdgeWeightedDigraph::new(parsed.vertices);
            header = Some(parsed);
            continue;
        }

        if tokens.len() != 3 {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected `from to weight`, found {} fields", tokens.len()),
            });
        }
        let from: usize = parse_field(tokens[0], line_no, "from vertex")?;
        let to: usize = parse_field(tokens[1], line_no, "to vertex")?;
        let weight: f64 = parse_field(tokens[2], line_no, "weight")?;
        graph.add_edge(DirectedEdge::new(from, to, weight))?;
    }

    let header = header.ok_or(Error::MissingHeader)?;
    debug!(
        "edge list: {} vertices, {} edges, source {}",
        graph.vertex_count(),
        graph.edge_count(),
        header.source
    );
    Ok(EdgeListFile { header, graph })
}

/// Opens and reads an edge-list file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeListFile> {
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file))
}

/// Writes `from to weight` rows, preceded by `header` when given
pub fn write_edge_list<Wr: Write>(
    mut writer: Wr,
    header: Option<&EdgeListHeader>,
    edges: &[(usize, usize, f64)],
) -> Result<()> {
    if let Some(header) = header {
        match header.destination {
            Some(destination) => writeln!(writer, "{} {} {}", header.vertices, header.source, destination)?,
            None => writeln!(writer, "{} {}", header.vertices, header.source)?,
        }
    }
    for (from, to, weight) in edges {
        writeln!(writer, "{} {} {}", from, to, weight)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_header(tokens: &[&str], line: usize) -> Result<EdgeListHeader> {
    if tokens.len() < 2 || tokens.len() > 3 {
        return Err(Error::Parse {
            line,
            message: format!("expected header `V source [destination]`, found {} fields", tokens.len()),
        });
    }

    let vertices: usize = parse_field(tokens[0], line, "vertex count")?;
    if vertices > MAX_VERTICES {
        return Err(Error::Parse {
            line,
            message: format!("vertex count {} exceeds the limit of {}", vertices, MAX_VERTICES),
        });
    }
    let source: usize = parse_field(tokens[1], line, "source vertex")?;
    let destination: Option<usize> = match tokens.get(2) {
        Some(token) => Some(parse_field(token, line, "destination vertex")?),
        None => None,
    };

    for vertex in std::iter::once(source).chain(destination) {
        if vertex >= vertices {
            return Err(Error::InvalidVertex {
                vertex,
                vertex_count: vertices,
            });
        }
    }

    Ok(EdgeListHeader {
        vertices,
        source,
        destination,
    })
}

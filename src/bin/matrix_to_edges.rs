use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process;

use dijkstra_sp::io::{matrix_to_edges, read_matrix, write_edge_list, EdgeListHeader};
use log::info;

const USAGE: &str = "usage: matrix_to_edges [MATRIX_FILE] [EDGE_FILE] [SOURCE [DESTINATION]]";

fn run(args: &[String]) -> dijkstra_sp::Result<()> {
    let input = args.first().map(String::as_str).unwrap_or("matrix.txt");
    let output = args.get(1).map(String::as_str).unwrap_or("edge.txt");
    let source = match args.get(2) {
        Some(raw) => Some(parse_vertex(raw)?),
        None => None,
    };
    let destination = match args.get(3) {
        Some(raw) => Some(parse_vertex(raw)?),
        None => None,
    };

    let matrix = read_matrix(BufReader::new(File::open(input)?))?;
    for vertex in source.into_iter().chain(destination) {
        if vertex >= matrix.len() {
            return Err(dijkstra_sp::Error::InvalidVertex {
                vertex,
                vertex_count: matrix.len(),
            });
        }
    }
    let edges = matrix_to_edges(&matrix);
    info!("{}x{} matrix -> {} edges", matrix.len(), matrix.len(), edges.len());

    // Without a source the header is left for the user to add by hand
    let header = source.map(|source| EdgeListHeader {
        vertices: matrix.len(),
        source,
        destination,
    });
    write_edge_list(BufWriter::new(File::create(output)?), header.as_ref(), &edges)?;

    println!("Edge list with distances has been written to {}.", output);
    Ok(())
}

fn parse_vertex(raw: &str) -> dijkstra_sp::Result<usize> {
    raw.parse()
        .map_err(|_| dijkstra_sp::Error::InvalidArgument(format!("invalid vertex `{}`", raw)))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 4 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    if let Err(e) = run(&args) {
        eprintln!("An error occurred: {}", e);
        process::exit(1);
    }
}

use std::io::Cursor;

use dijkstra_sp::config::{OutputFormat, RunConfig, VertexSpec};
use dijkstra_sp::graph::{DirectedEdge, Graph};
use dijkstra_sp::io::edge_list::MAX_VERTICES;
use dijkstra_sp::io::{
    matrix_to_edges, read_city_names, read_edge_list, read_matrix, write_edge_list, EdgeListHeader,
};
use dijkstra_sp::report::RouteReport;
use dijkstra_sp::{DijkstraSP, Error};

const EDGE_FILE: &str = "5 0 3\n0 1 1.0\n0 2 4\n1 2 2.0\n\n1 3 6\n2 3 3.0\n";
const CITY_FILE: &str = "Alpha\n  Bravo \nCharlie\nDelta\nEcho\n";

#[test]
fn test_read_edge_list() {
    let loaded = read_edge_list(Cursor::new(EDGE_FILE)).unwrap();

    assert_eq!(
        loaded.header,
        EdgeListHeader {
            vertices: 5,
            source: 0,
            destination: Some(3)
        }
    );
    assert_eq!(loaded.graph.vertex_count(), 5);
    assert_eq!(loaded.graph.edge_count(), 5);

    let from_one: Vec<DirectedEdge<f64>> = loaded.graph.adj(1).unwrap().copied().collect();
    assert_eq!(from_one, vec![DirectedEdge::new(1, 2, 2.0), DirectedEdge::new(1, 3, 6.0)]);
}

#[test]
fn test_edge_list_header_without_destination() {
    let loaded = read_edge_list(Cursor::new("3 1\n1 2 0.5\n")).unwrap();
    assert_eq!(loaded.header.destination, None);
    assert_eq!(loaded.header.source, 1);
}

#[test]
fn test_edge_list_errors() {
    assert!(matches!(read_edge_list(Cursor::new("\n\n")), Err(Error::MissingHeader)));
    assert!(matches!(
        read_edge_list(Cursor::new("3 0\n0 1\n")),
        Err(Error::Parse { line: 2, .. })
    ));
    assert!(matches!(
        read_edge_list(Cursor::new("3 0\n0 -1 2.0\n")),
        Err(Error::Parse { line: 2, .. })
    ));
    assert!(matches!(
        read_edge_list(Cursor::new("3 0\n0 1 heavy\n")),
        Err(Error::Parse { line: 2, .. })
    ));
    assert!(matches!(
        read_edge_list(Cursor::new("3 0\n0 3 1.0\n")),
        Err(Error::InvalidVertex { vertex: 3, vertex_count: 3 })
    ));
    assert!(matches!(
        read_edge_list(Cursor::new("3 5\n")),
        Err(Error::InvalidVertex { vertex: 5, .. })
    ));
}

#[test]
fn test_oversized_vertex_count_is_rejected() {
    assert!(matches!(
        read_edge_list(Cursor::new("18446744073709551615 0\n")),
        Err(Error::Parse { line: 1, .. })
    ));

    let just_over = format!("{} 0\n", MAX_VERTICES + 1);
    assert!(matches!(
        read_edge_list(Cursor::new(just_over)),
        Err(Error::Parse { line: 1, .. })
    ));

    // Header errors are reported on the header's own line
    assert!(matches!(
        read_edge_list(Cursor::new("\n99999999999 0 1\n0 1 2.0\n")),
        Err(Error::Parse { line: 2, .. })
    ));
}

#[test]
fn test_negative_weight_loads_but_engine_rejects() {
    let loaded = read_edge_list(Cursor::new("2 0\n0 1 -3\n")).unwrap();
    assert!(matches!(
        DijkstraSP::new(&loaded.graph, loaded.header.source),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn test_matrix_to_edge_list() {
    let matrix = read_matrix(Cursor::new("0 7 0\n3 0 2\n\n0 0 0\n")).unwrap();
    let edges = matrix_to_edges(&matrix);
    assert_eq!(edges, vec![(0, 1, 7.0), (1, 0, 3.0), (1, 2, 2.0)]);

    let mut out = Vec::new();
    let header = EdgeListHeader {
        vertices: 3,
        source: 0,
        destination: Some(2),
    };
    write_edge_list(&mut out, Some(&header), &edges).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "3 0 2\n0 1 7\n1 0 3\n1 2 2\n");

    let loaded = read_edge_list(Cursor::new(text)).unwrap();
    let sp = DijkstraSP::new(&loaded.graph, 0).unwrap();
    assert_eq!(dijkstra_sp::ShortestPaths::dist_to(&sp, 2).unwrap(), 9.0);
}

#[test]
fn test_matrix_accepts_fractional_weights() {
    let matrix = read_matrix(Cursor::new("0 2.5\n0.75 0\n")).unwrap();
    assert_eq!(matrix_to_edges(&matrix), vec![(0, 1, 2.5), (1, 0, 0.75)]);
}

#[test]
fn test_ragged_matrix_is_rejected() {
    assert!(matches!(
        read_matrix(Cursor::new("0 1\n1 0 4\n")),
        Err(Error::Parse { line: 2, .. })
    ));
}

#[test]
fn test_city_names() {
    let names = read_city_names(Cursor::new(CITY_FILE)).unwrap();
    assert_eq!(names.len(), 5);
    assert_eq!(names.name(1), Some("Bravo"));
    assert_eq!(names.name(9), None);
    assert_eq!(names.vertex_of("Delta"), Some(3));
}

#[test]
fn test_route_report_text() {
    let loaded = read_edge_list(Cursor::new(EDGE_FILE)).unwrap();
    let names = read_city_names(Cursor::new(CITY_FILE)).unwrap();
    let sp = DijkstraSP::new(&loaded.graph, 0).unwrap();

    let report = RouteReport::new(&sp, 3, &names).unwrap();
    assert!(report.is_reachable());
    assert_eq!(report.distance, Some(6.0));
    assert_eq!(report.hops.len(), 3);
    assert_eq!(
        report.render_text(),
        "Alpha to Delta (6.00)\nAlpha -> Bravo   Bravo -> Charlie   Charlie -> Delta\n"
    );

    let unreachable = RouteReport::new(&sp, 4, &names).unwrap();
    assert!(!unreachable.is_reachable());
    assert!(unreachable.hops.is_empty());
    assert_eq!(unreachable.render_text(), "Alpha to Echo         no path\n");
}

#[test]
fn test_route_report_json_and_unnamed_vertices() {
    let loaded = read_edge_list(Cursor::new(EDGE_FILE)).unwrap();
    let sp = DijkstraSP::new(&loaded.graph, 0).unwrap();
    let report = RouteReport::new(&sp, 2, &Default::default()).unwrap();

    assert_eq!(report.source_name, "0");
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["distance"], 3.0);
    assert_eq!(json["hops"][1]["to_name"], "2");

    let none = RouteReport::new(&sp, 4, &Default::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&none.to_json().unwrap()).unwrap();
    assert!(json["distance"].is_null());
}

#[test]
fn test_run_config_from_args() {
    let args = ["graph.txt", "--cities", "names.txt", "-s", "Alpha", "--destination", "3", "--json"];
    let config = RunConfig::from_args(args.iter().map(|s| s.to_string())).unwrap();

    assert_eq!(config.edge_file.to_str(), Some("graph.txt"));
    assert_eq!(config.city_file.as_deref().and_then(|p| p.to_str()), Some("names.txt"));
    assert_eq!(config.source, Some(VertexSpec::Name("Alpha".to_string())));
    assert_eq!(config.destination, Some(VertexSpec::Id(3)));
    assert_eq!(config.output, OutputFormat::Json);

    let defaults = RunConfig::from_args(Vec::new()).unwrap();
    assert_eq!(defaults, RunConfig::default());

    assert!(RunConfig::from_args(vec!["--verbose".to_string()]).is_err());
    assert!(RunConfig::from_args(vec!["--source".to_string()]).is_err());
    assert!(RunConfig::from_args(vec!["a.txt".to_string(), "b.txt".to_string()]).is_err());
}

#[test]
fn test_vertex_spec_resolution() {
    let names = read_city_names(Cursor::new(CITY_FILE)).unwrap();
    assert_eq!(VertexSpec::parse("Charlie").resolve(&names).unwrap(), 2);
    assert_eq!(VertexSpec::parse("4").resolve(&names).unwrap(), 4);
    assert!(matches!(
        VertexSpec::parse("Zulu").resolve(&names),
        Err(Error::InvalidArgument(_))
    ));
}

use std::env;
use std::path::Path;
use std::process;

use dijkstra_sp::config::{OutputFormat, RunConfig, DEFAULT_CITY_FILE};
use dijkstra_sp::io::{load_city_names, load_edge_list, CityNames};
use dijkstra_sp::report::RouteReport;
use dijkstra_sp::{DijkstraSP, Error};
use log::info;

fn run(config: &RunConfig) -> dijkstra_sp::Result<()> {
    let names = match &config.city_file {
        Some(path) => load_city_names(path)?,
        None if Path::new(DEFAULT_CITY_FILE).exists() => load_city_names(DEFAULT_CITY_FILE)?,
        None => CityNames::default(),
    };
    info!("loaded {} city names", names.len());

    let loaded = load_edge_list(&config.edge_file)?;
    info!("loaded edge list from {}", config.edge_file.display());

    let source = match &config.source {
        Some(spec) => spec.resolve(&names)?,
        None => loaded.header.source,
    };
    let destination = match &config.destination {
        Some(spec) => spec.resolve(&names)?,
        None => loaded.header.destination.ok_or_else(|| {
            Error::InvalidArgument("no destination in header; pass --destination".to_string())
        })?,
    };

    let sp = DijkstraSP::new(&loaded.graph, source)?;
    let report = RouteReport::new(&sp, destination, &names)?;

    match config.output {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match RunConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", RunConfig::USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

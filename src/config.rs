//! Run configuration for the `route` binary

use std::path::PathBuf;

use crate::io::CityNames;
use crate::{Error, Result};

/// City list picked up from the working directory when none is given
pub const DEFAULT_CITY_FILE: &str = "city.txt";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A vertex given on the command line, either by id or by city name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexSpec {
    Id(usize),
    Name(String),
}

impl VertexSpec {
    pub fn parse(raw: &str) -> Self {
        match raw.parse() {
            Ok(id) => VertexSpec::Id(id),
            Err(_) => VertexSpec::Name(raw.to_string()),
        }
    }

    /// Resolves to a vertex id; names are looked up in `names`
    pub fn resolve(&self, names: &CityNames) -> Result<usize> {
        match self {
            VertexSpec::Id(id) => Ok(*id),
            VertexSpec::Name(name) => names
                .vertex_of(name)
                .ok_or_else(|| Error::InvalidArgument(format!("unknown city `{}`", name))),
        }
    }
}

/// Configuration for one `route` invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub edge_file: PathBuf,
    pub city_file: Option<PathBuf>,
    /// Overrides the source in the edge-list header
    pub source: Option<VertexSpec>,
    /// Overrides the destination in the edge-list header
    pub destination: Option<VertexSpec>,
    pub output: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            edge_file: PathBuf::from("edge.txt"),
            city_file: None,
            source: None,
            destination: None,
            output: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    pub const USAGE: &'static str =
        "usage: route [EDGE_FILE] [--cities FILE] [--source V] [--destination V] [--json]";

    /// Parses arguments, not including the program name
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut edge_file_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--cities" | "-c" => config.city_file = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--source" | "-s" => config.source = Some(VertexSpec::parse(&value_for(&arg, args.next())?)),
                "--destination" | "-d" => {
                    config.destination = Some(VertexSpec::parse(&value_for(&arg, args.next())?))
                }
                "--json" => config.output = OutputFormat::Json,
                flag if flag.starts_with('-') => {
                    return Err(Error::InvalidArgument(format!("unknown flag `{}`", flag)));
                }
                path if !edge_file_seen => {
                    config.edge_file = PathBuf::from(path);
                    edge_file_seen = true;
                }
                extra => {
                    return Err(Error::InvalidArgument(format!("unexpected argument `{}`", extra)));
                }
            }
        }

        Ok(config)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::InvalidArgument(format!("`{}` needs a value", flag)))
}

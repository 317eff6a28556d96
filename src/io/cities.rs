use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Result;

/// Display names for vertices; line `i` of the source file names vertex `i`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityNames {
    names: Vec<String>,
}

impl CityNames {
    /// Name of `vertex`, if the list is long enough to have one
    pub fn name(&self, vertex: usize) -> Option<&str> {
        self.names.get(vertex).map(String::as_str)
    }

    /// First vertex carrying exactly `name`
    pub fn vertex_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Reads one name per line, trimmed. Blank lines are kept so that line
/// numbers stay aligned with vertex ids.
pub fn read_city_names<R: BufRead>(reader: R) -> Result<CityNames> {
    let names = reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(CityNames { names })
}

pub fn load_city_names<P: AsRef<Path>>(path: P) -> Result<CityNames> {
    let file = File::open(path)?;
    read_city_names(BufReader::new(file))
}

//! Turning a finished shortest-path computation into something a person reads
//!
//! The engine only knows vertex ids and raw distances; names and number
//! formatting are applied here.

use std::fmt::{Debug, Write};

use num_traits::Float;
use serde::Serialize;

use crate::algorithm::ShortestPaths;
use crate::io::CityNames;
use crate::Result;

/// One edge of a reported route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    pub from: usize,
    pub to: usize,
    pub from_name: String,
    pub to_name: String,
    pub weight: f64,
}

/// Shortest route between two vertices, labelled for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub source: usize,
    pub destination: usize,
    pub source_name: String,
    pub destination_name: String,
    /// `None` when the destination is unreachable
    pub distance: Option<f64>,
    pub hops: Vec<Hop>,
}

impl RouteReport {
    /// Queries `paths` for `destination` and labels every vertex via `names`
    ///
    /// Vertices without a name are labelled with their numeric id.
    pub fn new<W, S>(paths: &S, destination: usize, names: &CityNames) -> Result<Self>
    where
        W: Float + Debug,
        S: ShortestPaths<W>,
    {
        let source = paths.source();
        let label = |v: usize| names.name(v).map_or_else(|| v.to_string(), str::to_string);

        let (distance, hops) = match paths.path_to(destination)? {
            Some(path) => {
                let distance = paths.dist_to(destination)?.to_f64();
                let hops = path
                    .iter()
                    .map(|edge| Hop {
                        from: edge.from(),
                        to: edge.to(),
                        from_name: label(edge.from()),
                        to_name: label(edge.to()),
                        weight: edge.weight().to_f64().unwrap_or(f64::NAN),
                    })
                    .collect();
                (distance, hops)
            }
            None => (None, Vec::new()),
        };

        Ok(RouteReport {
            source,
            destination,
            source_name: label(source),
            destination_name: label(destination),
            distance,
            hops,
        })
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Plain-text rendering: a distance line followed by the hop chain,
    /// or a single "no path" line
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        match self.distance {
            Some(distance) => {
                let _ = writeln!(
                    out,
                    "{} to {} ({:.2})",
                    self.source_name, self.destination_name, distance
                );
                let chain: Vec<String> = self
                    .hops
                    .iter()
                    .map(|hop| format!("{} -> {}", hop.from_name, hop.to_name))
                    .collect();
                let _ = writeln!(out, "{}", chain.join("   "));
            }
            None => {
                let _ = writeln!(
                    out,
                    "{} to {}         no path",
                    self.source_name, self.destination_name
                );
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

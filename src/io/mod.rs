//! Loading graphs and vertex names from the plain-text formats used by the
//! `route` and `matrix_to_edges` binaries.
//!
//! Edge list: a header line `V source [destination]`, then one `from to weight`
//! row per edge. Matrix: whitespace-separated rows of a square weight matrix
//! where zero means "no edge". City list: one name per line, line `i` naming
//! vertex `i`.

pub mod cities;
pub mod edge_list;
pub mod matrix;

pub use cities::{load_city_names, read_city_names, CityNames};
pub use edge_list::{load_edge_list, read_edge_list, write_edge_list, EdgeListFile, EdgeListHeader};
pub use matrix::{matrix_to_edges, read_matrix};

use std::str::FromStr;

use crate::{Error, Result};

/// Parses one whitespace-separated token, naming the field in the error
pub(crate) fn parse_field<T: FromStr>(token: &str, line: usize, field: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {} `{}`", field, token),
    })
}

use std::io::BufRead;

use crate::io::parse_field;
use crate::{Error, Result};

/// Reads a square weight matrix, one whitespace-separated row per line
///
/// Blank lines are ignored. A row whose length differs from the number of rows
/// is a parse error.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    let mut row_lines = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| parse_field::<f64>(token, line_no, "matrix entry"))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
        row_lines.push(line_no);
    }

    let n = rows.len();
    for (row, line) in rows.iter().zip(row_lines) {
        if row.len() != n {
            return Err(Error::Parse {
                line,
                message: format!("row has {} entries, expected {}", row.len(), n),
            });
        }
    }

    Ok(rows)
}

/// One `(from, to, weight)` triple per non-zero cell, in row-major order
pub fn matrix_to_edges(matrix: &[Vec<f64>]) -> Vec<(usize, usize, f64)> {
    matrix
        .iter()
        .enumerate()
        .flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, weight)| **weight != 0.0)
                .map(move |(to, weight)| (from, to, *weight))
        })
        .collect()
}

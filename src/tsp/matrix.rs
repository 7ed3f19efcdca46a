//! In-memory distance matrix.

use super::types::TspInstance;
use crate::error::LahcError;

/// Rounding rule used when deriving integer distances from coordinates.
///
/// These are the two planar metrics of TSPLIB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeWeight {
    /// `EUC_2D`: Euclidean distance rounded to the nearest integer.
    Euc2d,
    /// `CEIL_2D`: Euclidean distance rounded up.
    Ceil2d,
}

impl EdgeWeight {
    fn distance(self, a: (f64, f64), b: (f64, f64)) -> i64 {
        let xd = a.0 - b.0;
        let yd = a.1 - b.1;
        let d = (xd * xd + yd * yd).sqrt();
        match self {
            EdgeWeight::Euc2d => (d + 0.5) as i64,
            EdgeWeight::Ceil2d => d.ceil() as i64,
        }
    }
}

/// Symmetric, non-negative `n x n` matrix of integer distances.
///
/// Stored row-major in a single buffer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<i64>,
}

impl DistanceMatrix {
    /// Builds a matrix from full rows.
    ///
    /// # Errors
    /// Returns [`LahcError::InvalidMatrix`] if the rows are not square,
    /// not symmetric, or contain a negative entry.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self, LahcError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LahcError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        for i in 0..n {
            for j in i..n {
                let (a, b) = (data[i * n + j], data[j * n + i]);
                if a < 0 {
                    return Err(LahcError::InvalidMatrix(format!(
                        "negative distance {a} at ({i}, {j})"
                    )));
                }
                if a != b {
                    return Err(LahcError::InvalidMatrix(format!(
                        "asymmetric entry at ({i}, {j}): {a} != {b}"
                    )));
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Builds a matrix from the upper triangle including the diagonal,
    /// listed row by row (TSPLIB `UPPER_DIAG_ROW`).
    ///
    /// # Errors
    /// Returns [`LahcError::InvalidMatrix`] if `weights` does not hold
    /// exactly `n * (n + 1) / 2` entries or holds a negative one.
    pub fn from_upper_diag_row(n: usize, weights: &[i64]) -> Result<Self, LahcError> {
        let expected = n * (n + 1) / 2;
        if weights.len() != expected {
            return Err(LahcError::InvalidMatrix(format!(
                "expected {expected} upper-diagonal weights for {n} cities, got {}",
                weights.len()
            )));
        }
        if let Some(w) = weights.iter().find(|&&w| w < 0) {
            return Err(LahcError::InvalidMatrix(format!("negative distance {w}")));
        }

        let mut data = vec![0; n * n];
        let mut it = weights.iter();
        for i in 0..n {
            for j in i..n {
                // length checked above
                let w = it.next().copied().unwrap_or_default();
                data[i * n + j] = w;
                data[j * n + i] = w;
            }
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from planar coordinates.
    pub fn from_coordinates(coords: &[(f64, f64)], weight: EdgeWeight) -> Self {
        let n = coords.len();
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = weight.distance(coords[i], coords[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

impl TspInstance for DistanceMatrix {
    fn num_cities(&self) -> usize {
        self.n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.n + to]
    }
}

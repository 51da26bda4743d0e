//! Pairwise comparison matrices and priority weight derivation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// A square matrix of positive reals encoding how much more important
/// criterion `i` is than criterion `j`.
///
/// Reciprocity (`m[i][j] == 1 / m[j][i]`, unit diagonal) is the
/// administrator's responsibility; derivation assumes it but does not
/// correct for violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairwiseMatrix(Vec<Vec<f64>>);

impl PairwiseMatrix {
    /// Wraps raw comparison cells.
    pub fn new(cells: Vec<Vec<f64>>) -> Self {
        Self(cells)
    }

    /// Number of criteria being compared.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Row-major view of the comparison cells.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    /// Derives the priority weight vector for this matrix.
    ///
    /// # Algorithm
    /// Column-sum normalization: every cell is divided by its column's sum
    /// to build the "target" matrix, and the weight of criterion `i` is
    /// the arithmetic mean of target row `i`. For a well-formed reciprocal
    /// matrix the resulting weights sum to 1.
    ///
    /// # Errors
    /// `InvalidMatrix` for an empty matrix, a non-square matrix, or a
    /// column summing to zero. No implicit correction is attempted.
    pub fn derive_weights(&self) -> Result<CriterionWeights, DomainError> {
        let n = self.0.len();
        if n == 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidMatrix,
                "Comparison matrix is empty",
            ));
        }
        if let Some(row) = self.0.iter().find(|row| row.len() != n) {
            return Err(DomainError::new(
                ErrorCode::InvalidMatrix,
                "Comparison matrix must be square",
            )
            .with_detail("rows", n.to_string())
            .with_detail("columns", row.len().to_string()));
        }

        let mut column_sums = vec![0.0_f64; n];
        for row in &self.0 {
            for (j, cell) in row.iter().enumerate() {
                column_sums[j] += cell;
            }
        }
        if let Some(j) = column_sums.iter().position(|&sum| sum == 0.0) {
            return Err(DomainError::new(
                ErrorCode::InvalidMatrix,
                "Comparison matrix column sums to zero",
            )
            .with_detail("column", j.to_string()));
        }

        let target: Vec<Vec<f64>> = self
            .0
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(cell, sum)| cell / sum)
                    .collect()
            })
            .collect();

        let weights = target
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();

        Ok(CriterionWeights { target, weights })
    }
}

/// Derived relative-importance scores for a set of criteria.
///
/// `weights` sums to 1 (up to floating-point tolerance) whenever the
/// source matrix was well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeights {
    /// Column-normalized comparison matrix the weights were averaged from.
    pub target: Vec<Vec<f64>>,
    /// Priority score per criterion, in matrix row order.
    pub weights: Vec<f64>,
}

impl CriterionWeights {
    /// Number of criteria covered by this vector.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when no criteria are covered.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

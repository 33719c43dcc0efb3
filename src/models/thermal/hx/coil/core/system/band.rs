//! Banded Gaussian elimination with partial pivoting.
//!
//! Entries are stored row by row in an `nalgebra` matrix with `2·kl + ku + 1`
//! columns: `kl` sub-diagonals, `ku` super-diagonals, and `kl` extra
//! super-diagonals to hold the fill-in from row interchanges.

use nalgebra::{DMatrix, DVector};

/// A pivot that vanished (or was not finite) during elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SingularPivot {
    pub(crate) row: usize,
}

/// Square matrix with `lower` sub-diagonals and `upper` super-diagonals.
#[derive(Debug, Clone)]
pub(crate) struct BandMatrix {
    size: usize,
    lower: usize,
    upper: usize,
    data: DMatrix<f64>,
}

impl BandMatrix {
    pub(crate) fn zeros(size: usize, lower: usize, upper: usize) -> Self {
        Self {
            size,
            lower,
            upper,
            data: DMatrix::zeros(size, 2 * lower + upper + 1),
        }
    }

    /// Storage column of `(row, col)`, if it lies inside the stored band.
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (col + self.lower)
            .checked_sub(row)
            .filter(|&offset| offset < self.data.ncols())
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.offset(row, col)
            .map_or(0.0, |offset| self.data[(row, offset)])
    }

    fn entry_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        let offset = self.offset(row, col)?;
        self.data.get_mut((row, offset))
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        let entry = self.entry_mut(row, col);
        debug_assert!(entry.is_some(), "({row}, {col}) lies outside the stored band");
        if let Some(entry) = entry {
            *entry = value;
        }
    }

    /// Adds `value` to entry `(row, col)`.
    ///
    /// The entry must lie at most `upper` above or `lower` below the diagonal.
    /// Debug builds assert this; release builds drop entries outside the band.
    pub(crate) fn add(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(
            col + self.lower >= row && col <= row + self.upper,
            "({row}, {col}) lies outside the declared band"
        );
        if let Some(entry) = self.entry_mut(row, col) {
            *entry += value;
        }
    }

    /// Solves `A·x = rhs`, consuming the matrix.
    pub(crate) fn solve(mut self, mut rhs: DVector<f64>) -> Result<DVector<f64>, SingularPivot> {
        let n = self.size;
        let tol = f64::EPSILON * self.data.amax();

        for k in 0..n {
            let last_row = (k + self.lower).min(n - 1);
            let last_col = (k + self.lower + self.upper).min(n - 1);

            let mut pivot_row = k;
            for i in k + 1..=last_row {
                if self.get(i, k).abs() > self.get(pivot_row, k).abs() {
                    pivot_row = i;
                }
            }

            let pivot = self.get(pivot_row, k);
            if !pivot.is_finite() || pivot.abs() <= tol {
                return Err(SingularPivot { row: k });
            }

            if pivot_row != k {
                for j in k..=last_col {
                    let upper = self.get(k, j);
                    let lower = self.get(pivot_row, j);
                    self.set(k, j, lower);
                    self.set(pivot_row, j, upper);
                }
                rhs.swap_rows(k, pivot_row);
            }

            for i in k + 1..=last_row {
                let factor = self.get(i, k) / pivot;
                if factor == 0.0 {
                    continue;
                }
                self.set(i, k, 0.0);
                for j in k + 1..=last_col {
                    let value = self.get(i, j) - factor * self.get(k, j);
                    self.set(i, j, value);
                }
                rhs[i] -= factor * rhs[k];
            }
        }

        let mut x = DVector::zeros(n);
        for k in (0..n).rev() {
            let last_col = (k + self.lower + self.upper).min(n - 1);
            let sum: f64 = (k + 1..=last_col).map(|j| self.get(k, j) * x[j]).sum();
            x[k] = (rhs[k] - sum) / self.get(k, k);
        }

        Ok(x)
    }

    #[cfg(test)]
    pub(crate) fn to_dense(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.size, self.size, |i, j| self.get(i, j))
    }
}

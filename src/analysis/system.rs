use crate::Probability;
use num_traits::Zero;

/// A square linear system `A·x = b` over exact rationals.
#[derive(Debug, Clone)]
pub struct System {
    /// Augmented rows `[A | b]`.
    rows: Vec<Vec<Probability>>,
}

impl System {
    pub fn new(coefficients: Vec<Vec<Probability>>, constants: Vec<Probability>) -> Self {
        debug_assert!(coefficients.len() == constants.len());
        debug_assert!(coefficients.iter().all(|r| r.len() == constants.len()));
        Self {
            rows: coefficients
                .into_iter()
                .zip(constants)
                .map(|(mut row, b)| {
                    row.push(b);
                    row
                })
                .collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Gauss–Jordan elimination with exact pivots.
    ///
    /// Returns `None` when the system has no unique solution, whether it
    /// is inconsistent or underdetermined.
    pub fn solve(mut self) -> Option<Vec<Probability>> {
        let n = self.size();
        for col in 0..n {
            let pivot = (col..n).find(|&r| !self.rows[r][col].is_zero())?;
            self.rows.swap(col, pivot);
            let ref lead = self.rows[col][col].clone();
            let pivot = self.rows[col]
                .iter()
                .map(|x| x / lead)
                .collect::<Vec<Probability>>();
            for (r, row) in self.rows.iter_mut().enumerate() {
                if r == col || row[col].is_zero() {
                    continue;
                }
                let factor = row[col].clone();
                for (x, p) in row.iter_mut().zip(pivot.iter()).skip(col) {
                    *x -= &factor * p;
                }
            }
            self.rows[col] = pivot;
        }
        Some(self.rows.into_iter().map(|mut row| row.remove(n)).collect())
    }
}

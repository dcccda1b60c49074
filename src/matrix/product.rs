use crate::error::{LinalgError, Result};
use crate::matrix::matrix::Matrix;
use crate::vector::scalar::Scalar;
use crate::vector::vector::Vector;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::ops;

impl<T: Scalar> Matrix<T> {
    /// Matrix product `self * rhs`.
    ///
    /// Defined only when `self` has as many columns as `rhs` has rows. The
    /// result has `self`'s row count and `rhs`'s column count; column `c` of
    /// the result is the combination of `self`'s columns weighted by column
    /// `c` of `rhs`.
    pub fn product(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        log::trace!(
            "Product of {:?} and {:?} matrices",
            self.shape(),
            rhs.shape()
        );

        if self.is_empty() || rhs.is_empty() || self.column_count() != rhs.row_count() {
            let error = LinalgError::IncompatibleDimensions {
                left: self.shape(),
                right: rhs.shape(),
            };
            log::debug!("{}", error);
            return Err(error);
        }

        let lhs = self.column_vectors();
        let combine = |weights: &Vector<T>| linear_combination(lhs, weights);

        #[cfg(feature = "parallel")]
        let columns: Vec<Vector<T>> = rhs.column_vectors().par_iter().map(combine).collect();

        #[cfg(not(feature = "parallel"))]
        let columns: Vec<Vector<T>> = rhs.column_vectors().iter().map(combine).collect();

        Ok(Matrix::from_column_vectors(columns))
    }
}

// Σ weights[k] * columns[k]; all columns share one dimension and there is one
// weight per column
fn linear_combination<T: Scalar>(columns: &[Vector<T>], weights: &Vector<T>) -> Vector<T> {
    let dimension = columns[0].dimension();
    let mut acc = vec![T::zero(); dimension];

    for (column, &weight) in columns.iter().zip(weights.iter()) {
        for (a, &x) in acc.iter_mut().zip(column.iter()) {
            *a = *a + x * weight;
        }
    }

    Vector::new(acc)
}

impl<T: Scalar> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.product(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

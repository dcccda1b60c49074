use crate::error::{LinalgError, Result};
use crate::utils::{transpose, uniform_dimension};
use crate::vector::scalar::Scalar;
use crate::vector::vector::Vector;
use std::fmt;

/// Dense matrix stored as a sequence of column vectors.
///
/// Every column has the same dimension (the row count). Rows are derived by
/// transposition when asked for. Accessors hand out copies, so nothing
/// returned from a `Matrix` aliases its storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    columns: Vec<Vector<T>>,
}

impl<T> Default for Matrix<T> {
    /// The empty matrix, with no columns. Only ever seen when built by hand;
    /// constructors report failures through `Err` instead.
    fn default() -> Self {
        Matrix {
            columns: Vec::new(),
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Builds a matrix whose columns are `columns`, left to right.
    pub fn new(columns: Vec<Vector<T>>) -> Result<Self> {
        Matrix::from_columns(columns)
    }

    pub fn from_columns(columns: Vec<Vector<T>>) -> Result<Self> {
        if let Err(error) = uniform_dimension(&columns) {
            log::debug!("Rejecting {} columns: {}", columns.len(), error);
            return Err(error);
        }
        Ok(Matrix { columns })
    }

    /// Builds a matrix whose rows are `rows`, top to bottom.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self> {
        if let Err(error) = uniform_dimension(&rows) {
            log::debug!("Rejecting {} rows: {}", rows.len(), error);
            return Err(error);
        }
        Ok(Matrix {
            columns: transpose(&rows),
        })
    }

    /// The `n`x`n` identity. `n` must be at least 1.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            let error = LinalgError::dimension_mismatch("at least one component", "0 components");
            log::debug!("Rejecting identity: {}", error);
            return Err(error);
        }

        Ok(Matrix {
            columns: (0..n)
                .map(|c| {
                    Vector::new(
                        (0..n)
                            .map(|r| if r == c { T::one() } else { T::zero() })
                            .collect(),
                    )
                })
                .collect(),
        })
    }

    #[inline(always)]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.dimension())
    }

    #[inline(always)]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Copies of the column vectors, left to right.
    pub fn columns(&self) -> Vec<Vector<T>> {
        self.columns.clone()
    }

    /// Copies of the row vectors, top to bottom. Empty only for the empty
    /// matrix.
    pub fn rows(&self) -> Vec<Vector<T>> {
        transpose(&self.columns)
    }

    pub fn column(&self, index: usize) -> Result<Vector<T>> {
        self.check_column(index)?;
        Ok(self.columns[index].clone())
    }

    pub fn row(&self, index: usize) -> Result<Vector<T>> {
        self.check_row(index)?;
        Ok(Vector::new(self.columns.iter().map(|c| c[index]).collect()))
    }

    /// The matrix whose columns are this matrix's rows.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            columns: self.rows(),
        }
    }

    pub fn replace_column(&mut self, index: usize, column: Vector<T>) -> Result<&mut Self> {
        self.check_column(index)?;
        if column.dimension() != self.row_count() {
            let error = LinalgError::dimension_mismatch(
                format!("{} components", self.row_count()),
                format!("{} components", column.dimension()),
            );
            log::debug!("Cannot replace column {}: {}", index, error);
            return Err(error);
        }

        self.columns[index] = column;
        Ok(self)
    }

    pub fn replace_row(&mut self, index: usize, row: Vector<T>) -> Result<&mut Self> {
        self.check_row(index)?;
        if row.dimension() != self.column_count() {
            let error = LinalgError::dimension_mismatch(
                format!("{} components", self.column_count()),
                format!("{} components", row.dimension()),
            );
            log::debug!("Cannot replace row {}: {}", index, error);
            return Err(error);
        }

        for (column, &value) in self.columns.iter_mut().zip(row.iter()) {
            column[index] = value;
        }
        Ok(self)
    }

    pub fn multiply_column(&mut self, index: usize, factor: T) -> Result<&mut Self> {
        self.check_column(index)?;
        self.columns[index].multiply(factor);
        Ok(self)
    }

    pub fn multiply_row(&mut self, index: usize, factor: T) -> Result<&mut Self> {
        self.check_row(index)?;
        for column in self.columns.iter_mut() {
            column[index] = column[index] * factor;
        }
        Ok(self)
    }

    pub(crate) fn column_vectors(&self) -> &[Vector<T>] {
        &self.columns
    }

    pub(crate) fn from_column_vectors(columns: Vec<Vector<T>>) -> Self {
        Matrix { columns }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        let bound = self.column_count();
        if index >= bound {
            log::debug!("Column {} out of range for {} columns", index, bound);
            return Err(LinalgError::IndexOutOfRange { index, bound });
        }
        Ok(())
    }

    fn check_row(&self, index: usize) -> Result<()> {
        let bound = self.row_count();
        if index >= bound {
            log::debug!("Row {} out of range for {} rows", index, bound);
            return Err(LinalgError::IndexOutOfRange { index, bound });
        }
        Ok(())
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

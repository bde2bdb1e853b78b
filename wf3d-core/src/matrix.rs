/// General matrix multiplication with a non-fatal shape check
use log::warn;
use nalgebra::DMatrix;

use crate::error::MatrixError;

/// Multiply an m×n matrix by an n×p matrix
pub fn try_multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a * b)
}

/// Multiply an m×n matrix by an n×p matrix.
///
/// On a shape mismatch the error is logged and an m×p zero matrix is
/// returned instead, so a render loop keeps running with a degraded frame.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    try_multiply(a, b).unwrap_or_else(|err| {
        warn!("{err}");
        DMatrix::zeros(a.nrows(), b.ncols())
    })
}

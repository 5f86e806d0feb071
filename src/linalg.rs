//! Dense symmetric linear algebra used by the least squares solver.
//!
//! The Gram matrix `XᵗX` is symmetric positive semi-definite, so its
//! eigenvalues are its singular values and the Moore-Penrose pseudo-inverse
//! can be formed from a symmetric eigendecomposition.

use crate::error::{LinearModelError, Result};
use crate::{Matrix, Vector};
use tracing::{trace, warn};

const MAX_SWEEPS: usize = 100;
const OFF_DIAGONAL_TOLERANCE: f64 = 1e-12;

/// Eigendecomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns the eigenvalues and a matrix whose columns are the matching
/// orthonormal eigenvectors. Only the symmetric part of the input is
/// meaningful; the caller guarantees symmetry.
pub fn symmetric_eigen(matrix: &Matrix) -> Result<(Vector, Matrix)> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(LinearModelError::shape(
            "symmetric_eigen",
            "a square matrix",
            format!("{}x{}", n, matrix.ncols()),
        ));
    }

    let mut a = matrix.to_owned();
    let mut v = Matrix::eye(n);
    let norm = a.iter().map(|x| x * x).sum::<f64>().sqrt();

    let mut converged = false;
    for sweep in 0..MAX_SWEEPS {
        if off_diagonal_norm(&a) <= OFF_DIAGONAL_TOLERANCE * norm {
            trace!(sweeps = sweep, size = n, "jacobi converged");
            converged = true;
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[(p, q)];
                if apq == 0.0 {
                    continue;
                }

                let theta = (a[(q, q)] - a[(p, p)]) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for k in 0..n {
                    let akp = a[(k, p)];
                    let akq = a[(k, q)];
                    a[(k, p)] = c * akp - s * akq;
                    a[(k, q)] = s * akp + c * akq;
                }
                for k in 0..n {
                    let apk = a[(p, k)];
                    let aqk = a[(q, k)];
                    a[(p, k)] = c * apk - s * aqk;
                    a[(q, k)] = s * apk + c * aqk;
                }
                for k in 0..n {
                    let vkp = v[(k, p)];
                    let vkq = v[(k, q)];
                    v[(k, p)] = c * vkp - s * vkq;
                    v[(k, q)] = s * vkp + c * vkq;
                }
            }
        }
    }

    if !converged {
        warn!(
            sweeps = MAX_SWEEPS,
            residual = off_diagonal_norm(&a),
            "jacobi eigendecomposition hit the sweep limit"
        );
    }

    Ok((a.diag().to_owned(), v))
}

/// Moore-Penrose pseudo-inverse of a symmetric matrix.
///
/// Eigenvalues with `|λ| <= rcond * max|λ|` are treated as zero, which gives
/// the minimum-norm solution for singular or rank-deficient input instead of
/// an error.
pub fn pinv_symmetric(matrix: &Matrix, rcond: f64) -> Result<Matrix> {
    pinv_symmetric_with_rank(matrix, rcond).map(|(pinv, _)| pinv)
}

/// Same as [`pinv_symmetric`], also returning how many eigenvalues survived
/// the cutoff (the effective rank).
pub fn pinv_symmetric_with_rank(matrix: &Matrix, rcond: f64) -> Result<(Matrix, usize)> {
    let (values, vectors) = symmetric_eigen(matrix)?;
    let cutoff = cutoff(&values, rcond);

    let mut rank = 0;
    let inverted = values.mapv(|l| {
        if l.abs() > cutoff {
            rank += 1;
            1.0 / l
        } else {
            0.0
        }
    });

    // V · diag(1/λ) · Vᵗ
    let scaled = &vectors * &inverted;
    Ok((scaled.dot(&vectors.t()), rank))
}

fn cutoff(values: &Vector, rcond: f64) -> f64 {
    let largest = values.iter().fold(0.0_f64, |m, l| m.max(l.abs()));
    rcond * largest
}

fn off_diagonal_norm(a: &Matrix) -> f64 {
    let n = a.nrows();
    let mut sum = 0.0;
    for p in 0..n {
        for q in (p + 1)..n {
            sum += 2.0 * a[(p, q)] * a[(p, q)];
        }
    }
    sum.sqrt()
}

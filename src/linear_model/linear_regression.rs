use crate::error::{LinearModelError, Result};
use crate::linalg;
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, Axis};
use tracing::debug;

/// Relative eigenvalue cutoff used by the pseudo-inverse of `XᵗX`, the same
/// default as NumPy's `pinv`.
pub const DEFAULT_RCOND: f64 = 1e-15;

/// Ordinary least squares solved through the normal equations,
/// `w = pinv(XᵗX) · Xᵗy`.
///
/// No intercept is added. The design matrix must already carry a constant
/// column if a bias term is wanted.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    weights: Option<Matrix>,
    rcond: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            weights: None,
            rcond: DEFAULT_RCOND,
        }
    }

    pub fn rcond(mut self, rcond: f64) -> Self {
        self.rcond = checked_rcond(rcond);
        self
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(LinearModelError::shape(
                "fit",
                format!("{} targets", x.nrows()),
                format!("{} targets", y.len()),
            ));
        }

        let y = y.view().insert_axis(Axis(1)).to_owned();
        self.fit_targets(x, &y)
    }

    /// Fits every column of `y` as an independent target, giving a D×K
    /// weight matrix.
    pub fn fit_targets(&mut self, x: &Matrix, y: &Matrix) -> Result<()> {
        if x.nrows() != y.nrows() {
            return Err(LinearModelError::shape(
                "fit",
                format!("{} target rows", x.nrows()),
                format!("{} target rows", y.nrows()),
            ));
        }

        let xt = x.t();
        let gram = xt.dot(x);
        let cross = xt.dot(y);

        let (gram_pinv, rank) = linalg::pinv_symmetric_with_rank(&gram, self.rcond)?;
        let weights = gram_pinv.dot(&cross);

        debug!(
            n_samples = x.nrows(),
            n_features = x.ncols(),
            n_targets = y.ncols(),
            rank,
            "fitted least squares weights"
        );
        if rank < x.ncols() {
            debug!(
                rank,
                n_features = x.ncols(),
                "gram matrix is rank deficient, using minimum-norm solution"
            );
        }

        self.weights = Some(weights);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let w = self.single_target("predict")?;
        check_features("predict", x.ncols(), w.len())?;
        Ok(x.dot(&w))
    }

    pub fn predict_one(&self, x: &Vector) -> Result<f64> {
        let w = self.single_target("predict_one")?;
        check_features("predict_one", x.len(), w.len())?;
        Ok(x.dot(&w))
    }

    pub fn predict_targets(&self, x: &Matrix) -> Result<Matrix> {
        let w = self.weights()?;
        check_features("predict_targets", x.ncols(), w.nrows())?;
        Ok(x.dot(w))
    }

    pub fn weights(&self) -> Result<&Matrix> {
        self.weights
            .as_ref()
            .ok_or(LinearModelError::NotFitted("LinearRegression"))
    }

    /// Weight vector of a single-target fit.
    pub fn coefficients(&self) -> Result<Vector> {
        self.single_target("coefficients").map(|w| w.to_owned())
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }

    fn single_target(&self, operation: &'static str) -> Result<ArrayView1<'_, f64>> {
        let w = self.weights()?;
        if w.ncols() != 1 {
            return Err(LinearModelError::shape(
                operation,
                "a single-target fit",
                format!("{} targets", w.ncols()),
            ));
        }
        Ok(w.column(0))
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn checked_rcond(rcond: f64) -> f64 {
    if !rcond.is_finite() || rcond < 0.0 {
        panic!("rcond must be finite and non-negative, got {}", rcond);
    }
    rcond
}

fn check_features(operation: &'static str, found: usize, expected: usize) -> Result<()> {
    if found != expected {
        return Err(LinearModelError::shape(
            operation,
            format!("{} features", expected),
            format!("{} features", found),
        ));
    }
    Ok(())
}

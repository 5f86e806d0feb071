use super::linear_regression::{DEFAULT_RCOND, LinearRegression, checked_rcond};
use crate::error::{LinearModelError, Result};
use crate::{Matrix, Vector};
use tracing::debug;

/// Binary classifier that thresholds a least squares fit at zero.
///
/// Labels are expected to be `-1.0` / `+1.0` but are not checked. The
/// prediction is the sign of `w·x`, so a sample lying exactly on the
/// decision boundary predicts `0.0`.
///
/// As with [`LinearRegression`], the bias column is the caller's job. The
/// boundary helpers assume the layout `[1, x₁, x₂]`.
#[derive(Clone, Debug)]
pub struct LinearClassifier {
    weights: Option<Vector>,
    rcond: f64,
}

impl LinearClassifier {
    pub fn new() -> Self {
        Self {
            weights: None,
            rcond: DEFAULT_RCOND,
        }
    }

    /// Fitted classifier with the given weights.
    pub fn from_weights(weights: Vector) -> Self {
        Self {
            weights: Some(weights),
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
        let mut regression = LinearRegression::new().rcond(self.rcond);
        regression.fit(x, y)?;

        let weights = regression.coefficients()?;
        debug!(n_features = weights.len(), "fitted linear classifier");
        self.weights = Some(weights);
        Ok(())
    }

    pub fn weights(&self) -> Result<&Vector> {
        self.weights
            .as_ref()
            .ok_or(LinearModelError::NotFitted("LinearClassifier"))
    }

    /// Raw linear scores `w·x`, one per row.
    pub fn decision_function(&self, x: &Matrix) -> Result<Vector> {
        let w = self.weights()?;
        if x.ncols() != w.len() {
            return Err(LinearModelError::shape(
                "decision_function",
                format!("{} features", w.len()),
                format!("{} features", x.ncols()),
            ));
        }
        Ok(x.dot(w))
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let scores = self.decision_function(x)?;
        Ok(scores.mapv(sign))
    }

    pub fn predict_one(&self, x: &Vector) -> Result<f64> {
        let w = self.weights()?;
        if x.len() != w.len() {
            return Err(LinearModelError::shape(
                "predict_one",
                format!("{} features", w.len()),
                format!("{} features", x.len()),
            ));
        }
        Ok(sign(w.dot(x)))
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let predictions = self.predict(x)?;
        crate::metrics::accuracy_score(y, &predictions)
    }

    /// Second feature coordinate of the point on the decision boundary with
    /// the given first coordinate, `(-w₀ + shift - w₁·abscissa) / w₂`.
    ///
    /// A non-zero `shift` moves the line to where the score equals `shift`.
    pub fn decision_boundary_ordinate(&self, abscissa: f64, shift: f64) -> Result<f64> {
        let w = self.weights()?;
        if w.len() != 3 {
            return Err(LinearModelError::shape(
                "decision_boundary_ordinate",
                "3 weights (bias and two features)",
                format!("{} weights", w.len()),
            ));
        }
        if w[2] == 0.0 {
            return Err(LinearModelError::division_by_zero(
                "weight of the second feature is zero, the boundary is vertical",
            ));
        }

        Ok((-w[0] + shift - w[1] * abscissa) / w[2])
    }

    /// [`decision_boundary_ordinate`](Self::decision_boundary_ordinate) for
    /// each abscissa, for plotting the separating line.
    pub fn decision_boundary(&self, abscissas: &Vector, shift: f64) -> Result<Vector> {
        self.weights()?;
        let ordinates = abscissas
            .iter()
            .map(|&a| self.decision_boundary_ordinate(a, shift))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector::from(ordinates))
    }
}

impl Default for LinearClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// f64::signum maps ±0.0 to ±1.0; here zero stays zero.
fn sign(score: f64) -> f64 {
    if score > 0.0 {
        1.0
    } else if score < 0.0 {
        -1.0
    } else if score == 0.0 {
        0.0
    } else {
        score
    }
}

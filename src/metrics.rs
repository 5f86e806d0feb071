use crate::error::{LinearModelError, Result};
use crate::Vector;

fn check_lengths(operation: &'static str, y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(LinearModelError::shape(
            operation,
            format!("y_pred of length {}", y_true.len()),
            format!("length {}", y_pred.len()),
        ));
    }
    if y_true.is_empty() {
        return Err(LinearModelError::EmptyInput(operation));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("mean_squared_error", y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / y_true.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("mean_absolute_error", y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / y_true.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("r2_score", y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Constant target
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of predictions exactly equal to the true label.
pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths("accuracy_score", y_true, y_pred)?;

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 5.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 4.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![2.0, 2.0, 2.0, 4.0];

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mae - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_accuracy_score() {
        let y_true = array![1.0, -1.0, 1.0, -1.0];
        let y_pred = array![1.0, -1.0, -1.0, 0.0];

        assert_eq!(accuracy_score(&y_true, &y_pred).unwrap(), 0.5);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0];

        assert!(matches!(
            mean_squared_error(&y_true, &y_pred),
            Err(LinearModelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let empty = Vector::zeros(0);
        assert_eq!(
            accuracy_score(&empty, &empty),
            Err(LinearModelError::EmptyInput("accuracy_score"))
        );
    }
}

//! Least squares linear models.
//!
//! - `LinearRegression`: ordinary least squares through the pseudo-inverse
//!   of the Gram matrix
//! - `LinearClassifier`: binary classification by the sign of a least
//!   squares score
//!
//! Neither model adds a bias term. Prepend a column of ones first.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use lsq_classifier::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
//! let y = array![1.0, 2.0, 3.0];
//!
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! assert!((predictions[2] - 3.0).abs() < 1e-9);
//! ```
//!
//! ## Linear Classifier
//! ```rust
//! use lsq_classifier::LinearClassifier;
//! use lsq_classifier::preprocessing::add_bias_column;
//! use ndarray::array;
//!
//! let x = add_bias_column(&array![[2.0, 2.0], [3.0, 1.0], [-2.0, -1.0], [-1.0, -3.0]]);
//! let y = array![1.0, 1.0, -1.0, -1.0];
//!
//! let mut model = LinearClassifier::new();
//! model.fit(&x, &y).unwrap();
//! assert_eq!(model.predict(&x).unwrap(), y);
//!
//! // Point on the separating line at x₁ = 0.
//! let x2 = model.decision_boundary_ordinate(0.0, 0.0).unwrap();
//! assert!(x2.is_finite());
//! ```

mod linear_classifier;
mod linear_regression;

pub use linear_classifier::LinearClassifier;
pub use linear_regression::{DEFAULT_RCOND, LinearRegression};

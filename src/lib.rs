//! Closed-form least squares regression and the sign-threshold linear
//! classifier built on top of it.
//!
//! Neither model adds an intercept on its own. Callers augment the design
//! matrix with a constant column first, conventionally as column 0 via
//! [`preprocessing::add_bias_column`], so that `w[0]` is the bias term.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod error;
pub mod linalg;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use error::{LinearModelError, Result};
pub use linear_model::{LinearClassifier, LinearRegression};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

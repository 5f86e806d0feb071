use crate::Matrix;
use ndarray::s;

/// Prepends a constant column of ones so that `w[0]` acts as the bias term.
///
/// The linear models never do this themselves; it is the caller's job to
/// augment raw features before `fit` and before every `predict`.
pub fn add_bias_column(x: &Matrix) -> Matrix {
    let mut augmented = Matrix::ones((x.nrows(), x.ncols() + 1));
    augmented.slice_mut(s![.., 1..]).assign(x);
    augmented
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_add_bias_column() {
        let x = array![[2.0, 3.0], [4.0, 5.0]];
        let augmented = add_bias_column(&x);

        assert_eq!(augmented, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_add_bias_column_no_rows() {
        let x = Matrix::zeros((0, 2));
        assert_eq!(add_bias_column(&x).shape(), &[0, 3]);
    }
}

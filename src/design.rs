use ndarray::{Array2, ArrayView2};

use crate::{Result, linalg};

/// Builds the augmented design matrix: a constant `1.0` column followed by the columns of
/// `observations`.
///
/// Column `0` pairs with `theta[0]` (the bias), column `j + 1` with feature `j`.
///
/// # Arguments
/// * `observations` - An `n × d` matrix, one row per sample.
///
/// # Returns
/// An `n × (d + 1)` matrix.
pub fn augment(observations: ArrayView2<f64>) -> Result<Array2<f64>> {
    let bias = Array2::ones((observations.nrows(), 1));
    linalg::concat_columns(bias.view(), observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, arr2};

    #[test]
    fn prepends_bias_column() {
        let x = arr2(&[[2., 3.], [4., 5.], [6., 7.]]);
        let augmented = augment(x.view()).unwrap();
        assert_eq!(augmented, arr2(&[[1., 2., 3.], [1., 4., 5.], [1., 6., 7.]]));
    }

    #[test]
    fn featureless_matrix_becomes_bias_only() {
        let x = Array2::<f64>::zeros((3, 0));
        let augmented = augment(x.view()).unwrap();
        assert_eq!(augmented.dim(), (3, 1));
        assert!(augmented.iter().all(|&v| v == 1.));
    }
}

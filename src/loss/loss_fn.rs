use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::Result;

/// An objective over a linear model `x · theta`.
///
/// `x` is an augmented design matrix (bias column first), `theta` its parameter vector and
/// `y` the targets, one per row of `x`.
pub trait LossFn {
    /// Scalar value of the objective.
    fn cost(&self, theta: ArrayView1<f64>, x: ArrayView2<f64>, y: ArrayView1<f64>)
    -> Result<f64>;

    /// Gradient of `cost` with respect to `theta`, same length as `theta`.
    fn gradient(
        &self,
        theta: ArrayView1<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<Array1<f64>>;
}

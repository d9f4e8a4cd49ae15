use ndarray::{Array1, ArrayView1};

use crate::Result;

/// An update rule applied to the parameters once a gradient is known.
pub trait Optimizer {
    /// Moves `params` according to `grad`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `grad` and `params` differ in length.
    fn update_params(&mut self, params: &mut Array1<f64>, grad: ArrayView1<f64>) -> Result<()>;
}

use ndarray::{Array1, ArrayView1};

use super::Optimizer;
use crate::{Result, SgdErr};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&mut self, params: &mut Array1<f64>, grad: ArrayView1<f64>) -> Result<()> {
        if grad.len() != params.len() {
            return Err(SgdErr::mismatch("gradient", grad.len(), params.len()));
        }

        params.scaled_add(-self.learning_rate, &grad);
        Ok(())
    }
}

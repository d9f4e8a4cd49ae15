use ndarray::{Array1, ArrayView1, ArrayView2};

use super::LossFn;
use crate::{Result, SgdErr, linalg};

/// Mean squared error, `J(θ) = (1/2m)·Σ(xθ − y)²`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }

    /// `x · theta − y`, together with the number of rows `m`.
    fn residuals(
        theta: ArrayView1<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, f64)> {
        let m = x.nrows();
        if m == 0 {
            return Err(SgdErr::mismatch("batch rows", 0, 1));
        }

        if y.len() != m {
            return Err(SgdErr::mismatch("targets", y.len(), m));
        }

        let predictions = linalg::mat_vec(x, theta)?;
        let residuals = linalg::sub(predictions.view(), y)?;
        Ok((residuals, m as f64))
    }
}

impl LossFn for Mse {
    fn cost(
        &self,
        theta: ArrayView1<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<f64> {
        let (r, m) = Self::residuals(theta, x, y)?;
        Ok(r.dot(&r) / (2. * m))
    }

    /// `(1/m)·xᵗ·(x·theta − y)`.
    fn gradient(
        &self,
        theta: ArrayView1<f64>,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        let (r, m) = Self::residuals(theta, x, y)?;
        let grad = linalg::t_mat_vec(x, r.view())?;
        Ok(linalg::scale(grad.view(), 1. / m))
    }
}

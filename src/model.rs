use ndarray::{Array1, ArrayView1, ArrayView2, s};

use crate::{Result, SgdErr, linalg};

/// Something that scores feature vectors.
pub trait Predictor {
    /// Scores a single sample.
    ///
    /// # Errors
    /// `DimensionMismatch` if `features` has the wrong length.
    fn predict(&self, features: ArrayView1<f64>) -> Result<f64>;

    /// Scores every row of `observations`.
    fn predict_batch(&self, observations: ArrayView2<f64>) -> Result<Array1<f64>> {
        observations
            .rows()
            .into_iter()
            .map(|row| self.predict(row))
            .collect::<Result<Vec<_>>>()
            .map(Array1::from)
    }
}

/// A fitted linear model, `score(x) = theta[0] + x · theta[1..]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    theta: Array1<f64>,
}

impl LinearModel {
    /// Wraps a parameter vector whose first entry is the bias.
    ///
    /// # Errors
    /// `DimensionMismatch` if `theta` is empty.
    pub fn new(theta: Array1<f64>) -> Result<Self> {
        if theta.is_empty() {
            return Err(SgdErr::mismatch("theta", 0, 1));
        }

        Ok(Self { theta })
    }

    pub fn bias(&self) -> f64 {
        self.theta[0]
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.theta.slice(s![1..])
    }

    pub fn theta(&self) -> ArrayView1<'_, f64> {
        self.theta.view()
    }

    pub fn into_theta(self) -> Array1<f64> {
        self.theta
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: ArrayView1<f64>) -> Result<f64> {
        let weights = self.weights();
        if features.len() != weights.len() {
            return Err(SgdErr::mismatch("features", features.len(), weights.len()));
        }

        Ok(self.bias() + features.dot(&weights))
    }

    fn predict_batch(&self, observations: ArrayView2<f64>) -> Result<Array1<f64>> {
        let scores = linalg::mat_vec(observations, self.weights())?;
        Ok(scores + self.bias())
    }
}

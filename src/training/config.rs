use serde::{Deserialize, Serialize};

use crate::{Result, SgdErr, sampling::Sampling};

pub const DEFAULT_LEARNING_RATE: f64 = 0.001;
pub const DEFAULT_ITERATIONS: usize = 4000;
pub const DEFAULT_BATCH_SIZE: usize = 1;
pub const DEFAULT_SEED: u64 = 42;

/// Hyperparameters of a `MiniBatchSgd` run.
///
/// Nothing is checked at construction: whether `batch_size` is valid depends on the number
/// of observations, so `validate` runs at the start of every `optimize` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SgdConfig {
    pub learning_rate: f64,
    pub iterations: usize,
    #[serde(alias = "observations_in_each_batch")]
    pub batch_size: usize,
    pub seed: u64,
    pub sampling: Sampling,
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: DEFAULT_SEED,
            sampling: Sampling::default(),
        }
    }
}

impl SgdConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    /// `SgdErr::Config` on malformed JSON or unknown sampling schemes. A negative
    /// `iterations` (or `batch_size`) cannot be represented by `usize`, so it is rejected
    /// here as `SgdErr::Config` rather than later by `validate` as `InvalidConfiguration`.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Checks the hyperparameters against a dataset of `n` observations.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the learning rate is not strictly positive (NaN included)
    /// or the batch size is outside `[1, n]`.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.learning_rate.is_nan() || self.learning_rate <= 0. {
            return Err(SgdErr::InvalidConfiguration(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }

        if self.batch_size == 0 || self.batch_size > n {
            return Err(SgdErr::InvalidConfiguration(format!(
                "batch size {} is outside [1, {n}]",
                self.batch_size
            )));
        }

        Ok(())
    }
}

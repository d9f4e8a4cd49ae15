use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{Result, SgdErr, linalg};

/// How a batch is drawn from the index domain `[0, n)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Shuffle the whole domain, then keep the first `k` indices. `O(n)` draws per batch.
    #[default]
    FullPermutation,
    /// Stop the Fisher–Yates pass after `k` swaps. Same distribution over batches as
    /// `FullPermutation` but a different draw sequence for a given seed.
    Partial,
}

/// Draws duplicate-free batches of row indices.
///
/// The sampler owns the random stream; every call advances it, so the sequence of
/// batches for a fixed seed depends only on the order of calls.
#[derive(Debug, Clone)]
pub struct IndexSampler<R: Rng = StdRng> {
    rng: R,
    sampling: Sampling,
}

impl IndexSampler<StdRng> {
    /// Creates a sampler over a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64, sampling: Sampling) -> Self {
        Self::new(StdRng::seed_from_u64(seed), sampling)
    }
}

impl<R: Rng> IndexSampler<R> {
    /// Creates a sampler that draws from `rng`.
    pub fn new(rng: R, sampling: Sampling) -> Self {
        Self { rng, sampling }
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Returns `k` unique indices from `[0, n)`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `k` is not in `[1, n]`.
    pub fn sample(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        if k == 0 || k > n {
            return Err(SgdErr::InvalidConfiguration(format!(
                "batch size {k} is outside [1, {n}]"
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        match self.sampling {
            Sampling::FullPermutation => {
                linalg::shuffle(&mut indices, &mut self.rng);
                indices.truncate(k);
                Ok(indices)
            }
            Sampling::Partial => {
                let (chosen, _) = indices.partial_shuffle(&mut self.rng, k);
                Ok(chosen.to_vec())
            }
        }
    }
}

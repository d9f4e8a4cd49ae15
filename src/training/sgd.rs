use log::{debug, info, trace};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::{Rng, rngs::StdRng};

use super::{FitTrace, SgdConfig};
use crate::{
    LinearModel, Result, SgdErr, design, linalg,
    loss::{LossFn, Mse},
    optimization::{GradientDescent, Optimizer},
    sampling::IndexSampler,
    stopping::{FixedIterations, StopCriterion},
};

/// Mini-batch stochastic gradient descent for linear regression.
///
/// The random stream is created once, from `config.seed`, and keeps advancing across
/// `optimize` calls: reusing an instance continues the draw sequence instead of restarting
/// it. `optimize` takes `&mut self`, so one instance never runs two fits at once.
#[derive(Debug, Clone)]
pub struct MiniBatchSgd<R: Rng = StdRng> {
    config: SgdConfig,
    sampler: IndexSampler<R>,
}

impl MiniBatchSgd<StdRng> {
    /// Creates an optimizer whose random stream is seeded with `config.seed`.
    pub fn new(config: SgdConfig) -> Self {
        let sampler = IndexSampler::seeded(config.seed, config.sampling);
        Self { config, sampler }
    }
}

impl Default for MiniBatchSgd<StdRng> {
    fn default() -> Self {
        Self::new(SgdConfig::default())
    }
}

impl<R: Rng> MiniBatchSgd<R> {
    /// Creates an optimizer drawing from `rng`; `config.seed` is ignored.
    pub fn with_rng(config: SgdConfig, rng: R) -> Self {
        let sampler = IndexSampler::new(rng, config.sampling);
        Self { config, sampler }
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    /// Fits a parameter vector to `observations` and `targets`.
    ///
    /// # Arguments
    /// * `observations` - An `n × d` matrix, one row per sample.
    /// * `targets` - The `n` expected outputs.
    ///
    /// # Returns
    /// `theta` of length `d + 1`; `theta[0]` is the bias.
    ///
    /// # Errors
    /// * `DimensionMismatch` if `targets.len() != n`.
    /// * `InvalidConfiguration` if the learning rate is not positive or the batch size is
    ///   outside `[1, n]`.
    ///
    /// Both are reported before any iteration runs. Divergence is not an error: an
    /// oversized learning rate yields non-finite parameters.
    pub fn optimize(
        &mut self,
        observations: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        self.validate(observations, targets)?;
        let x = design::augment(observations)?;
        let mut stop = FixedIterations::new(self.config.iterations);
        self.descend(x.view(), targets, &mut stop, None)
    }

    /// Same as `optimize`, additionally recording the full-data cost after each update.
    ///
    /// Tracing draws nothing from the random stream, so the returned parameters equal the
    /// ones `optimize` would return from the same state.
    pub fn optimize_traced(
        &mut self,
        observations: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, FitTrace)> {
        let mut stop = FixedIterations::new(self.config.iterations);
        self.optimize_traced_until(observations, targets, &mut stop)
    }

    /// Traced run that ends when `stop` says so, whatever `config.iterations` holds.
    pub(crate) fn optimize_traced_until<S: StopCriterion>(
        &mut self,
        observations: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        stop: &mut S,
    ) -> Result<(Array1<f64>, FitTrace)> {
        self.validate(observations, targets)?;
        let x = design::augment(observations)?;
        let mut fit_trace = FitTrace::with_capacity(self.config.iterations);
        let theta = self.descend(x.view(), targets, stop, Some(&mut fit_trace))?;
        Ok((theta, fit_trace))
    }

    /// `optimize`, wrapped as a predictor.
    pub fn fit(
        &mut self,
        observations: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Result<LinearModel> {
        LinearModel::new(self.optimize(observations, targets)?)
    }

    fn validate(&self, observations: ArrayView2<f64>, targets: ArrayView1<f64>) -> Result<()> {
        let n = observations.nrows();
        if targets.len() != n {
            return Err(SgdErr::mismatch("targets", targets.len(), n));
        }

        self.config.validate(n)?;

        let SgdConfig {
            learning_rate,
            iterations,
            batch_size,
            seed,
            ..
        } = self.config;
        debug!(
            learning_rate = learning_rate,
            iterations = iterations,
            batch_size = batch_size,
            seed = seed;
            "validated configuration"
        );

        Ok(())
    }

    /// The optimizer loop over an already augmented matrix. Performs no configuration
    /// checks: a zero learning rate is accepted and leaves `theta` at zero.
    pub(crate) fn descend<S: StopCriterion>(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        stop: &mut S,
        mut fit_trace: Option<&mut FitTrace>,
    ) -> Result<Array1<f64>> {
        let (n, cols) = x.dim();
        let batch_size = self.config.batch_size;
        info!(
            "fitting {n} observations x {} features, batch size {batch_size}, {:?} sampling",
            cols.saturating_sub(1),
            self.sampler.sampling()
        );

        let loss = Mse::new();
        let mut optimizer = GradientDescent::new(self.config.learning_rate);
        let mut theta = Array1::zeros(cols);

        let mut iteration = 0;
        while !stop.should_stop(iteration) {
            let indices = self.sampler.sample(n, batch_size)?;
            let batch_x = linalg::gather_rows(x, &indices)?;
            let batch_y = linalg::gather(y, &indices)?;

            let grad = loss.gradient(theta.view(), batch_x.view(), batch_y.view())?;
            optimizer.update_params(&mut theta, grad.view())?;

            if let Some(fit_trace) = fit_trace.as_deref_mut() {
                let cost = loss.cost(theta.view(), x, y)?;
                trace!(iteration = iteration, cost = cost; "step");
                fit_trace.record(cost);
            }

            iteration += 1;
        }

        info!("finished after {iteration} iterations");
        Ok(theta)
    }
}

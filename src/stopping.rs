/// Decides when the optimizer loop ends.
pub trait StopCriterion {
    /// Called before every iteration with the number of updates applied so far.
    fn should_stop(&mut self, iteration: usize) -> bool;
}

/// Stops after exactly `iterations` updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIterations {
    iterations: usize,
}

impl FixedIterations {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl StopCriterion for FixedIterations {
    fn should_stop(&mut self, iteration: usize) -> bool {
        iteration >= self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_exactly_n_iterations() {
        let mut stop = FixedIterations::new(3);
        assert_eq!(stop.iterations(), 3);
        let runs = (0..).take_while(|&i| !stop.should_stop(i)).count();
        assert_eq!(runs, 3);
    }

    #[test]
    fn zero_never_runs() {
        let mut stop = FixedIterations::new(0);
        assert!(stop.should_stop(0));
    }
}

/// Full-data cost recorded after every update of a traced run.
///
/// Fields are private so the recorded series can grow new columns without breaking
/// callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitTrace {
    costs: Vec<f64>,
}

/// Upper bound on the entries reserved up front; longer runs grow the buffer as they go.
const MAX_PREALLOCATED: usize = 1 << 16;

impl FitTrace {
    /// Creates an empty trace for a run of `iterations` updates, reserving room for at most
    /// `MAX_PREALLOCATED` of them.
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            costs: Vec::with_capacity(iterations.min(MAX_PREALLOCATED)),
        }
    }

    pub(crate) fn record(&mut self, cost: f64) {
        self.costs.push(cost);
    }

    /// Returns the cost after each update, in iteration order.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Returns the number of recorded updates.
    pub fn iterations(&self) -> usize {
        self.costs.len()
    }

    /// Returns the cost after the last update, if any update ran.
    pub fn last_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }
}

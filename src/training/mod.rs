mod config;
mod sgd;
mod trace;

pub use config::{
    DEFAULT_BATCH_SIZE, DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE, DEFAULT_SEED, SgdConfig,
};
pub use sgd::MiniBatchSgd;
pub use trace::FitTrace;

//! Mini-batch stochastic gradient descent for linear regression.
//!
//! [`MiniBatchSgd`] fits `theta` (bias first) to an observation matrix and its targets by
//! repeatedly drawing a seeded random batch of rows, computing the mean-squared-error
//! gradient over it and stepping against that gradient for a fixed number of iterations.
//!
//! ```no_run
//! use minibatch_sgd::{MiniBatchSgd, SgdConfig};
//! use ndarray::{arr1, arr2};
//!
//! let x = arr2(&[[1.], [2.], [3.], [4.]]);
//! let y = arr1(&[3., 5., 7., 9.]);
//! let cfg = SgdConfig::default()
//!     .with_learning_rate(0.05)
//!     .with_iterations(2000)
//!     .with_batch_size(4);
//!
//! let theta = MiniBatchSgd::new(cfg).optimize(x.view(), y.view())?;
//! # Ok::<(), minibatch_sgd::SgdErr>(())
//! ```

pub mod design;
pub mod error;
pub mod linalg;
pub mod loss;
pub mod model;
pub mod optimization;
pub mod sampling;
pub mod stopping;
pub mod training;

pub use error::{Result, SgdErr};
pub use model::{LinearModel, Predictor};
pub use sampling::{IndexSampler, Sampling};
pub use training::{FitTrace, MiniBatchSgd, SgdConfig};

use minibatch_sgd::{
    MiniBatchSgd, Predictor, Sampling, SgdConfig,
    loss::{LossFn, Mse},
};
use ndarray::{Array1, Array2, arr1, arr2};
use ndarray_rand::RandomExt;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Normal, Uniform};

const TRUE_THETA: [f64; 4] = [0.5, 2., -1., 3.];

fn line() -> (Array2<f64>, Array1<f64>) {
    (arr2(&[[1.], [2.], [3.], [4.]]), arr1(&[3., 5., 7., 9.]))
}

/// 200 samples of three uniform features in [-1, 1] with a small gaussian noise on top of
/// `TRUE_THETA`.
fn synthetic() -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(1234);
    let x = Array2::random_using((200, 3), Uniform::new(-1., 1.).unwrap(), &mut rng);
    let noise = Array1::random_using(200, Normal::new(0., 0.01).unwrap(), &mut rng);

    let weights = arr1(&TRUE_THETA[1..]);
    let y = x.dot(&weights) + TRUE_THETA[0] + noise;
    (x, y)
}

fn full_data_cost(theta: &Array1<f64>, x: &Array2<f64>, y: &Array1<f64>) -> f64 {
    let augmented = minibatch_sgd::design::augment(x.view()).unwrap();
    Mse.cost(theta.view(), augmented.view(), y.view()).unwrap()
}

#[test]
fn recovers_line_with_full_batches() {
    let (x, y) = line();
    let cfg = SgdConfig::default()
        .with_learning_rate(0.05)
        .with_iterations(2000)
        .with_batch_size(4)
        .with_seed(42);

    let theta = MiniBatchSgd::new(cfg).optimize(x.view(), y.view()).unwrap();

    assert!((theta[0] - 1.).abs() < 0.05, "theta = {theta}");
    assert!((theta[1] - 2.).abs() < 0.05, "theta = {theta}");
}

#[test]
fn recovers_multi_feature_weights_with_mini_batches() {
    let (x, y) = synthetic();
    let cfg = SgdConfig::default()
        .with_learning_rate(0.1)
        .with_iterations(3000)
        .with_batch_size(16);

    let theta = MiniBatchSgd::new(cfg).optimize(x.view(), y.view()).unwrap();

    assert_eq!(theta.len(), 4);
    for (got, expected) in theta.iter().zip(TRUE_THETA) {
        assert!((got - expected).abs() < 0.05, "theta = {theta}");
    }
}

#[test]
fn batch_size_boundaries_stay_finite() {
    let (x, y) = line();
    let zero_cost = full_data_cost(&Array1::zeros(2), &x, &y);

    for batch_size in [1, 4] {
        let cfg = SgdConfig::default()
            .with_learning_rate(0.01)
            .with_batch_size(batch_size);
        let theta = MiniBatchSgd::new(cfg).optimize(x.view(), y.view()).unwrap();

        assert!(theta.iter().all(|v| v.is_finite()), "batch {batch_size}: {theta}");
        assert!(full_data_cost(&theta, &x, &y) < zero_cost);
    }
}

#[test]
fn full_batch_cost_never_increases() {
    let (x, y) = synthetic();
    let cfg = SgdConfig::default()
        .with_learning_rate(0.01)
        .with_iterations(500)
        .with_batch_size(x.nrows());

    let (_, fit_trace) = MiniBatchSgd::new(cfg)
        .optimize_traced(x.view(), y.view())
        .unwrap();

    assert_eq!(fit_trace.iterations(), 500);
    for w in fit_trace.costs().windows(2) {
        assert!(w[1] <= w[0] + 1e-12, "cost went up: {} -> {}", w[0], w[1]);
    }
}

#[test]
fn mini_batch_cost_decreases_on_average() {
    let (x, y) = synthetic();
    let cfg = SgdConfig::default()
        .with_learning_rate(0.01)
        .with_iterations(1000)
        .with_batch_size(8);

    let (_, fit_trace) = MiniBatchSgd::new(cfg)
        .optimize_traced(x.view(), y.view())
        .unwrap();

    let costs = fit_trace.costs();
    let mean = |s: &[f64]| s.iter().sum::<f64>() / s.len() as f64;
    assert!(mean(&costs[900..]) < mean(&costs[..100]));
}

#[test]
fn partial_sampling_reaches_the_same_fit() {
    let (x, y) = line();
    let base = SgdConfig::default()
        .with_learning_rate(0.05)
        .with_iterations(4000)
        .with_batch_size(2);

    let full = MiniBatchSgd::new(base.with_sampling(Sampling::FullPermutation))
        .optimize(x.view(), y.view())
        .unwrap();
    let partial = MiniBatchSgd::new(base.with_sampling(Sampling::Partial))
        .optimize(x.view(), y.view())
        .unwrap();

    for (a, b) in full.iter().zip(&partial) {
        assert!((a - b).abs() < 0.05, "full {full} vs partial {partial}");
    }
}

#[test]
fn fitted_model_predicts_targets() {
    let (x, y) = line();
    let cfg = SgdConfig::default()
        .with_learning_rate(0.05)
        .with_iterations(2000)
        .with_batch_size(4);

    let model = MiniBatchSgd::new(cfg).fit(x.view(), y.view()).unwrap();
    let y_pred = model.predict_batch(x.view()).unwrap();

    for (p, t) in y_pred.iter().zip(&y) {
        assert!((p - t).abs() < 0.1, "y_pred = {y_pred}");
    }
    assert!((model.predict(arr1(&[10.]).view()).unwrap() - 21.).abs() < 0.2);
}

use std::{env, fs, process};

use log::{error, info};
use minibatch_sgd::{MiniBatchSgd, Predictor, SgdConfig};
use ndarray::{arr1, arr2};

fn load_config() -> minibatch_sgd::Result<SgdConfig> {
    let Some(path) = env::args().nth(1) else {
        return Ok(SgdConfig::default()
            .with_learning_rate(0.05)
            .with_iterations(2000)
            .with_batch_size(4));
    };

    info!("reading configuration from {path}");
    let raw = fs::read_to_string(&path)?;
    SgdConfig::from_json(&raw)
}

fn run() -> minibatch_sgd::Result<()> {
    let cfg = load_config()?;

    // y = 2x + 1
    let x = arr2(&[[1.], [2.], [3.], [4.]]);
    let y = arr1(&[3., 5., 7., 9.]);

    let model = MiniBatchSgd::new(cfg).fit(x.view(), y.view())?;
    let y_pred = model.predict_batch(x.view())?;

    println!("theta: {:?}", model.theta());
    println!("y:      {y:?}");
    println!("y_pred: {y_pred:?}");
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use quench::{Dataset, Sgd, SoftmaxRegression, TrainConfig, Trainer};

use rand::prelude::*;
use std::f64::consts::PI;

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal(rng: &mut ThreadRng) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Two Gaussian blobs in the plane, one per class, with one-hot labels.
fn make_blobs(per_class: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut rng = rand::thread_rng();
    let mut inputs = Vec::new();
    let mut labels = Vec::new();

    for _ in 0..per_class {
        inputs.push(vec![
            -1.0 + 0.7 * sample_standard_normal(&mut rng),
            -1.0 + 0.7 * sample_standard_normal(&mut rng),
        ]);
        labels.push(vec![1.0, 0.0]);

        inputs.push(vec![
            1.0 + 0.7 * sample_standard_normal(&mut rng),
            1.0 + 0.7 * sample_standard_normal(&mut rng),
        ]);
        labels.push(vec![0.0, 1.0]);
    }

    (inputs, labels)
}

fn main() {
    env_logger::init();

    let (train_x, train_y) = make_blobs(300);
    let (val_x, val_y) = make_blobs(100);

    let train_set = Dataset::new(train_x, train_y);
    let val_set = Dataset::new(val_x, val_y);

    let model = SoftmaxRegression::new(2, 2);
    let config = TrainConfig::new(20, true);
    let mut trainer = Trainer::new(model, Sgd::new(0.5), config, train_set, val_set);

    let history = trainer.train(40).expect("training failed");

    let steps = history.train.loss.len();
    println!("Processed {steps} training steps.");
    if let Some((step, loss)) = history.val.loss.last() {
        println!("Last validation check at step {step}: val_loss = {loss:.6}");
    }
    if let Some((_, acc)) = history.val.accuracy.last() {
        println!("Final validation accuracy: {:.1}%", acc * 100.0);
    }

    history
        .save_json("blobs_history.json")
        .expect("failed to write history");
    println!("Full run history written to blobs_history.json");
}

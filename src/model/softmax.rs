use serde::{Serialize, Deserialize};

use crate::data::dataset::{Batch, Dataset};
use crate::errors::train_error::ModelError;
use crate::loss::cross_entropy::{cross_entropy, softmax, softmax_cross_entropy_grad};
use crate::model::trainable::{Evaluation, TrainableModel};
use crate::optim::sgd::Sgd;

/// Multinomial logistic regression: a linear map per class followed by
/// softmax, trained with cross-entropy.
///
/// Parameters start at zero. The objective is convex, so zero init loses
/// nothing and keeps runs reproducible without a seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    /// One weight row per class, each of length `n_features`.
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    n_features: usize,
}

impl SoftmaxRegression {
    pub fn new(n_features: usize, n_classes: usize) -> SoftmaxRegression {
        SoftmaxRegression {
            weights: vec![vec![0.0; n_features]; n_classes],
            biases: vec![0.0; n_classes],
            n_features,
        }
    }

    pub fn n_classes(&self) -> usize {
        self.biases.len()
    }

    /// Class probabilities for one input row.
    fn forward(&self, input: &[f64]) -> Result<Vec<f64>, ModelError> {
        if input.len() != self.n_features {
            return Err(ModelError::new(format!(
                "input has {} features, model expects {}",
                input.len(),
                self.n_features
            )));
        }
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(self.biases.iter())
            .map(|(row, b)| row.iter().zip(input.iter()).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect();
        Ok(softmax(&logits))
    }

    /// Mean cross-entropy loss over a whole split.
    fn mean_loss(&self, set: &Dataset) -> Result<f64, ModelError> {
        let mut total = 0.0;
        for (input, label) in set.inputs.iter().zip(set.labels.iter()) {
            let probs = self.forward(input)?;
            total += cross_entropy(&probs, label);
        }
        Ok(total / set.len() as f64)
    }

    /// Fraction of samples whose predicted class (argmax) matches the label.
    fn accuracy(&self, set: &Dataset) -> Result<f64, ModelError> {
        let mut correct = 0usize;
        for (input, label) in set.inputs.iter().zip(set.labels.iter()) {
            let probs = self.forward(input)?;
            if argmax(&probs) == argmax(label) {
                correct += 1;
            }
        }
        Ok(correct as f64 / set.len() as f64)
    }
}

impl TrainableModel for SoftmaxRegression {
    fn train_step(&mut self, batch: &Batch, optimizer: &Sgd) -> Result<f64, ModelError> {
        if batch.is_empty() {
            return Err(ModelError::new("train_step called with an empty batch"));
        }

        let n_classes = self.n_classes();
        let mut w_grads = vec![vec![0.0; self.n_features]; n_classes];
        let mut b_grads = vec![0.0; n_classes];
        let mut total_loss = 0.0;

        for (input, label) in batch.inputs.iter().zip(batch.labels.iter()) {
            let probs = self.forward(input)?;
            total_loss += cross_entropy(&probs, label);

            // Combined softmax + cross-entropy delta per class.
            let delta = softmax_cross_entropy_grad(&probs, label);
            for (c, d) in delta.iter().enumerate() {
                for (g, x) in w_grads[c].iter_mut().zip(input.iter()) {
                    *g += d * x;
                }
                b_grads[c] += d;
            }
        }

        // Average over the batch, then descend.
        let inv_batch = 1.0 / batch.len() as f64;
        for grads in w_grads.iter_mut() {
            for g in grads.iter_mut() {
                *g *= inv_batch;
            }
        }
        for g in b_grads.iter_mut() {
            *g *= inv_batch;
        }

        for (row, grads) in self.weights.iter_mut().zip(w_grads.iter()) {
            optimizer.step(row, grads);
        }
        optimizer.step(&mut self.biases, &b_grads);

        Ok(total_loss / batch.len() as f64)
    }

    fn evaluate(
        &mut self,
        train_set: &Dataset,
        val_set: &Dataset,
    ) -> Result<Evaluation, ModelError> {
        if val_set.is_empty() {
            return Err(ModelError::new("evaluate called with an empty validation set"));
        }
        Ok(Evaluation {
            val_loss: self.mean_loss(val_set)?,
            train_accuracy: self.accuracy(train_set)?,
            val_accuracy: self.accuracy(val_set)?,
        })
    }
}

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two trivially separable classes on a single feature.
    fn separable_batch() -> Batch {
        Batch {
            inputs: vec![vec![-1.0], vec![-0.8], vec![0.8], vec![1.0]],
            labels: vec![
                vec![1.0, 0.0],
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0],
            ],
        }
    }

    #[test]
    fn zero_init_predicts_uniform_probabilities() {
        let model = SoftmaxRegression::new(1, 2);
        let probs = model.forward(&[0.3]).unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn training_reduces_loss_on_separable_data() {
        let mut model = SoftmaxRegression::new(1, 2);
        let sgd = Sgd::new(0.5);
        let batch = separable_batch();

        let first = model.train_step(&batch, &sgd).unwrap();
        let mut last = first;
        for _ in 0..100 {
            last = model.train_step(&batch, &sgd).unwrap();
        }
        assert!(last < first);
    }

    #[test]
    fn trained_model_classifies_separable_data_perfectly() {
        let mut model = SoftmaxRegression::new(1, 2);
        let sgd = Sgd::new(0.5);
        let batch = separable_batch();
        for _ in 0..200 {
            model.train_step(&batch, &sgd).unwrap();
        }

        let set = Dataset::new(batch.inputs.clone(), batch.labels.clone());
        assert!((model.accuracy(&set).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mismatched_feature_count_is_a_model_error() {
        let mut model = SoftmaxRegression::new(3, 2);
        let batch = Batch {
            inputs: vec![vec![1.0, 2.0]],
            labels: vec![vec![1.0, 0.0]],
        };
        assert!(model.train_step(&batch, &Sgd::new(0.1)).is_err());
    }
}

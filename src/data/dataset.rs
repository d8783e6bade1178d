use serde::{Serialize, Deserialize};

/// A supervised dataset: one input row and one label row per sample.
///
/// Rows are plain `Vec<f64>`; for classification, labels are expected to be
/// one-hot. The dataset is read-only for the duration of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl Dataset {
    /// Builds a dataset from paired input and label rows.
    ///
    /// # Panics
    /// Panics if `inputs` and `labels` differ in length.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<Vec<f64>>) -> Dataset {
        assert_eq!(
            inputs.len(),
            labels.len(),
            "inputs and labels must have equal length"
        );
        Dataset { inputs, labels }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// One mini-batch of samples, materialized by the batch loader.
#[derive(Debug, Clone)]
pub struct Batch {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl Batch {
    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

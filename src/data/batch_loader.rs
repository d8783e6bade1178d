use rand::seq::SliceRandom;

use crate::data::dataset::{Batch, Dataset};

/// Lazy iterator over the mini-batches of one pass through a dataset.
///
/// Built fresh at the start of every epoch so each pass gets its own sample
/// order. With `shuffle` set, the sample order is permuted once at
/// construction; input/label pairing is preserved because a single index
/// vector drives both sides.
///
/// The trailing partial batch is dropped: a pass yields exactly
/// `dataset.len() / batch_size` batches.
pub struct BatchLoader<'a> {
    dataset: &'a Dataset,
    order: Vec<usize>,
    batch_size: usize,
    cursor: usize,
}

impl<'a> BatchLoader<'a> {
    /// # Panics
    /// Panics if `batch_size == 0`.
    pub fn new(dataset: &'a Dataset, batch_size: usize, shuffle: bool) -> BatchLoader<'a> {
        assert!(batch_size > 0, "batch_size must be at least 1");

        let mut order: Vec<usize> = (0..dataset.len()).collect();
        if shuffle {
            order.shuffle(&mut rand::thread_rng());
        }

        BatchLoader {
            dataset,
            order,
            batch_size,
            cursor: 0,
        }
    }

    /// Number of batches this loader will yield in total.
    pub fn batches_per_pass(&self) -> usize {
        self.dataset.len() / self.batch_size
    }
}

impl<'a> Iterator for BatchLoader<'a> {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        let batch_end = self.cursor + self.batch_size;
        if batch_end > self.order.len() {
            // Trailing samples that do not fill a whole batch are skipped.
            return None;
        }

        let picked = &self.order[self.cursor..batch_end];
        let inputs = picked.iter().map(|&i| self.dataset.inputs[i].clone()).collect();
        let labels = picked.iter().map(|&i| self.dataset.labels[i].clone()).collect();
        self.cursor = batch_end;

        Some(Batch { inputs, labels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_dataset(n: usize) -> Dataset {
        let inputs: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64]).collect();
        let labels: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64 * 10.0]).collect();
        Dataset::new(inputs, labels)
    }

    #[test]
    fn unshuffled_pass_preserves_sample_order() {
        let data = toy_dataset(6);
        let batches: Vec<Batch> = BatchLoader::new(&data, 2, false).collect();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].inputs, vec![vec![0.0], vec![1.0]]);
        assert_eq!(batches[2].labels, vec![vec![40.0], vec![50.0]]);
    }

    #[test]
    fn trailing_partial_batch_is_dropped() {
        let data = toy_dataset(23);
        let loader = BatchLoader::new(&data, 6, false);

        assert_eq!(loader.batches_per_pass(), 3);
        let batches: Vec<Batch> = loader.collect();
        assert_eq!(batches.len(), 3);
        assert!(batches.iter().all(|b| b.len() == 6));
    }

    #[test]
    fn shuffled_pass_keeps_inputs_paired_with_labels() {
        let data = toy_dataset(20);
        for batch in BatchLoader::new(&data, 4, true) {
            for (input, label) in batch.inputs.iter().zip(batch.labels.iter()) {
                assert_eq!(label[0], input[0] * 10.0);
            }
        }
    }

    #[test]
    fn loader_restarts_fresh_each_pass() {
        let data = toy_dataset(8);
        for _ in 0..3 {
            let count = BatchLoader::new(&data, 4, false).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn batch_size_larger_than_dataset_yields_nothing() {
        let data = toy_dataset(3);
        assert_eq!(BatchLoader::new(&data, 4, false).count(), 0);
    }
}

use serde::{Serialize, Deserialize};

/// An append-only series of scalars indexed by training step.
///
/// Steps are strictly increasing, so the series is stored as parallel
/// arrays and looked up by binary search. Entries are never overwritten or
/// deleted; the trainer keeps every recorded value for the full run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSeries {
    steps: Vec<usize>,
    values: Vec<f64>,
}

impl StepSeries {
    pub fn new() -> StepSeries {
        StepSeries::default()
    }

    /// Appends a value for `step`.
    ///
    /// # Panics
    /// Panics if `step` is not greater than the last recorded step; the
    /// trainer only ever appends in increasing step order.
    pub fn push(&mut self, step: usize, value: f64) {
        if let Some(&last) = self.steps.last() {
            assert!(
                step > last,
                "steps must be recorded in increasing order ({step} after {last})"
            );
        }
        self.steps.push(step);
        self.values.push(value);
    }

    /// The value recorded at exactly `step`, if any.
    pub fn value_at(&self, step: usize) -> Option<f64> {
        self.steps
            .binary_search(&step)
            .ok()
            .map(|i| self.values[i])
    }

    /// The most recently recorded (step, value) pair.
    pub fn last(&self) -> Option<(usize, f64)> {
        match (self.steps.last(), self.values.last()) {
            (Some(&step), Some(&value)) => Some((step, value)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recorded steps, in insertion (= increasing step) order.
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }

    /// Recorded values, parallel to `steps()`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates (step, value) pairs in step order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.steps.iter().copied().zip(self.values.iter().copied())
    }
}

/// Metrics recorded on the training split: loss at every step, accuracy at
/// validation steps only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainHistory {
    pub loss: StepSeries,
    pub accuracy: StepSeries,
}

/// Metrics recorded on the validation split, at validation steps only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValHistory {
    pub loss: StepSeries,
    pub accuracy: StepSeries,
}

/// Everything a run recorded, returned by value when training terminates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    pub train: TrainHistory,
    pub val: ValHistory,
}

impl RunHistory {
    /// Serializes the run histories to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes run histories from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<RunHistory> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut s = StepSeries::new();
        s.push(0, 1.0);
        s.push(5, 0.5);
        s.push(10, 0.25);

        assert_eq!(s.len(), 3);
        assert_eq!(s.value_at(5), Some(0.5));
        assert_eq!(s.value_at(7), None);
        assert_eq!(s.last(), Some((10, 0.25)));
    }

    #[test]
    #[should_panic(expected = "increasing order")]
    fn non_increasing_push_panics() {
        let mut s = StepSeries::new();
        s.push(3, 1.0);
        s.push(3, 2.0);
    }

    #[test]
    fn iteration_follows_step_order() {
        let mut s = StepSeries::new();
        s.push(2, 0.2);
        s.push(4, 0.4);
        let collected: Vec<(usize, f64)> = s.iter().collect();
        assert_eq!(collected, vec![(2, 0.2), (4, 0.4)]);
    }

    #[test]
    fn run_history_round_trips_through_json() {
        let mut history = RunHistory::default();
        history.train.loss.push(0, 0.9);
        history.train.loss.push(1, 0.8);
        history.val.loss.push(0, 1.1);

        let json = serde_json::to_string(&history).unwrap();
        let back: RunHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}

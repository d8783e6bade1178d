/// Plain stochastic gradient descent. The learning rate is the only
/// optimizer state the harness threads through a run.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one descent update `p -= lr * g` to a parameter slice.
    ///
    /// # Panics
    /// Panics if `params` and `grads` differ in length.
    pub fn step(&self, params: &mut [f64], grads: &[f64]) {
        assert_eq!(
            params.len(),
            grads.len(),
            "params and grads must have equal length"
        );
        for (p, g) in params.iter_mut().zip(grads.iter()) {
            *p -= self.learning_rate * g;
        }
    }
}

//! Categorical cross-entropy over softmax probabilities.

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

/// Numerically stable softmax: shifts by the max logit before exponentiating.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Scalar cross-entropy loss:
///   L = -sum(expected[i] * log(probs[i] + eps))
///
/// `probs`    - softmax probabilities, shape [n_classes]
/// `expected` - one-hot (or soft) target distribution, shape [n_classes]
pub fn cross_entropy(probs: &[f64], expected: &[f64]) -> f64 {
    probs
        .iter()
        .zip(expected.iter())
        .map(|(p, e)| -e * (p + EPS).ln())
        .sum()
}

/// Gradient of the combined softmax + cross-entropy w.r.t. the pre-softmax
/// logits. The composition simplifies to `probs[i] - expected[i]`
/// element-wise, so callers apply this once and skip the softmax Jacobian.
pub fn softmax_cross_entropy_grad(probs: &[f64], expected: &[f64]) -> Vec<f64> {
    probs
        .iter()
        .zip(expected.iter())
        .map(|(p, e)| p - e)
        .collect()
}

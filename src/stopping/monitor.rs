use crate::train::history::StepSeries;

/// Consecutive validation checks without improvement tolerated before a run
/// is stopped.
pub const DEFAULT_PATIENCE: usize = 10;

/// Decides whether training should stop at `current_step`.
///
/// Walks backward from `current_step` through the last `patience` validation
/// checkpoints, spaced `cadence` steps apart, comparing each recorded loss to
/// the one `cadence` steps earlier. A single strict pairwise decrease
/// anywhere in that window means the run is still improving and the verdict
/// is `false`; equality counts as no improvement. Only when every
/// consecutive pair in the window is non-decreasing does the verdict become
/// `true`.
///
/// Note the comparison is between consecutive checkpoints, not against the
/// best loss seen so far.
///
/// Before `patience` checks have accumulated (that is, while
/// `current_step < (patience - 1) * cadence`) the verdict is always `false`.
///
/// The function is pure: same inputs, same verdict, no side effects.
///
/// # Arguments
/// - `val_loss`     - validation losses recorded at every validation step so
///                    far, `current_step` included
/// - `current_step` - the step of the check being decided
/// - `cadence`      - steps between validation checks, at least 1
/// - `patience`     - checks without improvement tolerated, at least 1
///
/// # Panics
/// Panics if `cadence` or `patience` is zero, or if a step in the lookback
/// window has no recorded loss. The trainer records every validation step
/// before consulting the monitor, so a missing entry is a caller bug, not a
/// runtime condition.
pub fn should_stop(
    val_loss: &StepSeries,
    current_step: usize,
    cadence: usize,
    patience: usize,
) -> bool {
    assert!(cadence > 0, "cadence must be at least 1");
    assert!(patience > 0, "patience must be at least 1");

    let check_limit = (patience - 1) * cadence;
    if current_step < check_limit {
        return false;
    }

    let mut current_loss = loss_at(val_loss, current_step);
    let mut step = current_step;
    for _ in 0..patience - 1 {
        let previous_loss = loss_at(val_loss, step - cadence);
        if current_loss < previous_loss {
            return false;
        }
        current_loss = previous_loss;
        step -= cadence;
    }
    true
}

fn loss_at(val_loss: &StepSeries, step: usize) -> f64 {
    val_loss
        .value_at(step)
        .unwrap_or_else(|| panic!("no validation loss recorded at step {step}"))
}

// Closed-form checks on a finished run
use super::{LoopParams, Outcome};
use crate::error::BoundsError;

/// `ceil(ln(limit / start) / ln(increment))`, zero when the start already reaches the limit.
pub fn estimated_iterations(params: &LoopParams) -> u64 {
    if params.start >= params.limit { return 0; }
    ((params.limit / params.start).ln() / params.increment.ln()).ceil() as u64
}

/// The counter reached the limit, and the value before it had not.
pub fn check_outcome(params: &LoopParams, outcome: &Outcome) -> Result<(), BoundsError> {
    let LoopParams { increment, limit, .. } = *params;
    if outcome.counter < limit {
        return Err(BoundsError::BelowLimit { counter: outcome.counter, limit });
    }
    if outcome.iterations > 0 {
        let previous = outcome.counter / increment;
        if previous >= limit {
            return Err(BoundsError::Overshoot { counter: outcome.counter, previous, limit });
        }
    }
    Ok(())
}

/// Every step strictly increases and the walk ends where `outcome` did.
pub fn check_steps<I: IntoIterator<Item = f64>>(steps: I, outcome: &Outcome) -> Result<(), BoundsError> {
    let mut iter = steps.into_iter();
    let Some(mut previous) = iter.next() else {
        return Err(BoundsError::StepMismatch { last: f64::NAN, steps: 0, counter: outcome.counter, iterations: outcome.iterations });
    };
    let mut step = 0u64;
    for value in iter {
        step += 1;
        if value <= previous { return Err(BoundsError::NotIncreasing { step, previous, value }); }
        previous = value;
    }
    if step != outcome.iterations || previous.to_bits() != outcome.counter.to_bits() {
        return Err(BoundsError::StepMismatch { last: previous, steps: step, counter: outcome.counter, iterations: outcome.iterations });
    }
    Ok(())
}

pub fn iterations_within(params: &LoopParams, outcome: &Outcome, tolerance: u64) -> bool {
    estimated_iterations(params).abs_diff(outcome.iterations) <= tolerance
}

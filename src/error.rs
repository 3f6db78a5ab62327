use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("start must be finite and positive, got {0}")]
    Start(f64),
    #[error("increment must be finite and greater than 1, got {0}")]
    Increment(f64),
    #[error("limit must be finite, got {0}")]
    Limit(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("counter {counter} stopped below limit {limit}")]
    BelowLimit { counter: f64, limit: f64 },
    #[error("counter {counter} overshot: previous value {previous} already reached limit {limit}")]
    Overshoot { counter: f64, previous: f64, limit: f64 },
    #[error("step {step} did not increase: {previous} -> {value}")]
    NotIncreasing { step: u64, previous: f64, value: f64 },
    #[error("stepping ended at {last} after {steps} steps, run ended at {counter} after {iterations}")]
    StepMismatch { last: f64, steps: u64, counter: f64, iterations: u64 },
}

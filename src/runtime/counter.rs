// Counter loop: repeated multiplication until the counter crosses the limit
use crate::error::ParamError;
use log::debug;
use std::hint::black_box;
use std::time::{Duration, Instant};

pub const START: f64 = 1.0;
pub const INCREMENT: f64 = 1.000001;
pub const LIMIT: f64 = 1_000_000_000_000.0;

/// Inputs of one loop run. The default is the only set the binary uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopParams {
    pub start: f64,
    pub increment: f64,
    pub limit: f64,
}

impl Default for LoopParams {
    fn default() -> Self {
        Self { start: START, increment: INCREMENT, limit: LIMIT }
    }
}

impl LoopParams {
    /// Reject anything that would not terminate or would leave `f64` semantics.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.start.is_finite() || self.start <= 0.0 { return Err(ParamError::Start(self.start)); }
        if !self.increment.is_finite() || self.increment <= 1.0 { return Err(ParamError::Increment(self.increment)); }
        if !self.limit.is_finite() { return Err(ParamError::Limit(self.limit)); }
        Ok(())
    }
}

/// Result of a single run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub counter: f64,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn elapsed_secs(&self) -> f64 { self.elapsed.as_secs_f64() }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CounterLoop {
    params: LoopParams,
}

impl CounterLoop {
    pub fn new(params: LoopParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Multiply until `counter >= limit`, timing only the loop itself.
    pub fn run(&self) -> Outcome {
        let LoopParams { start, increment, limit } = black_box(self.params);
        debug!("counter loop: start={start} increment={increment} limit={limit}");

        let timer = Instant::now();
        let mut counter = start;
        let mut iterations = 0u64;
        while counter < limit {
            counter *= increment;
            iterations += 1;
        }
        let elapsed = timer.elapsed();
        let counter = black_box(counter);

        debug!("counter loop: {iterations} iterations in {elapsed:?}");
        Outcome { counter, iterations, elapsed }
    }

    /// Every value the counter takes, ending with the first one at or above the limit.
    pub fn steps(&self) -> Steps {
        Steps { next: Some(self.params.start), increment: self.params.increment, limit: self.params.limit }
    }
}

pub struct Steps {
    next: Option<f64>,
    increment: f64,
    limit: f64,
}

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let current = self.next?;
        self.next = if current < self.limit { Some(current * self.increment) } else { None };
        Some(current)
    }
}

/// Run the fixed computation once: `(final counter, elapsed seconds)`.
pub fn run() -> (f64, f64) {
    let outcome = CounterLoop::default().run();
    (outcome.counter, outcome.elapsed_secs())
}

pub mod bounds;
pub mod counter;

pub use counter::{CounterLoop, LoopParams, Outcome};

mod error;
mod report;
mod runtime;

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use log::info;
use std::io::{self, Write};

use crate::runtime::{bounds, counter, CounterLoop, LoopParams};

#[derive(ClapParser, Debug)]
#[command(name = "counter-loop", version, about = "Multiply a counter by 1.000001 until it reaches 10^12")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the loop once and print the final counter and elapsed time (default)
    Run,
    /// Run the loop, then verify it stopped at the first value reaching the limit
    Check,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&mut out),
        Commands::Check => check(&mut out),
    }
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    let (counter, elapsed_secs) = counter::run();
    report::write_report(out, counter, elapsed_secs).context("writing report to stdout")
}

fn check<W: Write>(out: &mut W) -> Result<()> {
    let params = LoopParams::default();
    let counter_loop = CounterLoop::new(params).context("loop parameters")?;
    let outcome = counter_loop.run();
    report::write_report(out, outcome.counter, outcome.elapsed_secs()).context("writing report to stdout")?;
    bounds::check_outcome(&params, &outcome).context("loop post-condition")?;
    bounds::check_steps(counter_loop.steps(), &outcome).context("counter monotonicity")?;
    let estimate = bounds::estimated_iterations(&params);
    info!("check: {} iterations, closed-form estimate {}", outcome.iterations, estimate);
    if !bounds::iterations_within(&params, &outcome, 1) {
        bail!("iteration count {} is more than one step from the closed-form estimate {}", outcome.iterations, estimate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_prints_two_lines() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Counter: 1000000066290.697\nExecution time: "));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn default_steps_increase_up_to_the_run_result() {
        let counter_loop = CounterLoop::default();
        let outcome = counter_loop.run();
        assert_eq!(bounds::check_steps(counter_loop.steps(), &outcome), Ok(()));
        assert_eq!(counter_loop.steps().count() as u64, outcome.iterations + 1);
    }

    #[test]
    fn check_passes_for_fixed_constants() {
        let mut buf = Vec::new();
        check(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Counter: 1000000066290.697");
        assert!(lines[1].starts_with("Execution time: "));
    }
}

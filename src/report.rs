use std::io::{self, Write};

/// Two lines: the final counter and the loop's wall-clock seconds.
pub fn write_report<W: Write>(out: &mut W, counter: f64, elapsed_secs: f64) -> io::Result<()> {
    writeln!(out, "Counter: {}", counter)?;
    writeln!(out, "Execution time: {}", elapsed_secs)?;
    out.flush()
}

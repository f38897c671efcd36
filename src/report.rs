//! Timed solution and its stdout report.
//!
//! The report is two lines: the sum, then `Time elapsed: <duration>` using the `Debug` rendering of
//! [`Duration`].

use std::io::{self, Write};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Errors that occur while emitting the report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write result: {0}")]
    Write(#[from] io::Error),
}

/// The computed sum and how long the computation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub sum: u64,
    pub elapsed: Duration,
}

impl Solution {
    /// Run [`even_fib_core::compute`] under a monotonic timer.
    pub fn measure() -> Self {
        let start = Instant::now();
        let sum = even_fib_core::compute();
        let elapsed = start.elapsed();
        Self { sum, elapsed }
    }

    pub fn write_report(&self, out: &mut impl Write) -> Result<(), ReportError> {
        writeln!(out, "{}", self.sum)?;
        writeln!(out, "Time elapsed: {:?}", self.elapsed)?;
        out.flush()?;
        Ok(())
    }
}

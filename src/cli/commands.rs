//! CLI command implementations
//!
//! Command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::Write;

use crate::report::Solution;

use super::{CliResult, ExitCode};

/// Compute the sum under a timer and write the report to `out`.
pub fn solve(out: &mut impl Write) -> CliResult<ExitCode> {
    let solution = Solution::measure();
    tracing::debug!(sum = solution.sum, elapsed = ?solution.elapsed, "computed even Fibonacci sum");

    solution.write_report(out)?;
    Ok(ExitCode::SUCCESS)
}

#![forbid(unsafe_code)]
//! even-fib: sum the even-valued Fibonacci terms below four million.
//!
//! The arithmetic lives in the `even_fib_core` crate. This crate adds the timing wrapper, the report
//! written to stdout, and the command line.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod report;
pub mod version;

pub use even_fib_core::{UPPER_BOUND, compute, sum_even_terms_below};
pub use report::{ReportError, Solution};

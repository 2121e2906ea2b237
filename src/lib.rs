//! # Algobench: Textbook-Algorithm Micro-Benchmark Harness
//!
//! Algobench times five textbook algorithms - linear search, binary
//! search, bubble sort, exchange sort, recursive Fibonacci - across a
//! fixed size × trial matrix and writes the raw `(size, duration)` samples
//! to per-algorithm files in a plot-ready point-list format.
//!
//! Single-threaded and single-shot by design: each sample is one
//! invocation on freshly generated input, with no warmup, retries, or
//! statistics. Aggregation belongs to whatever plots the output.
//!
//! ## Example Usage
//!
//! ```rust
//! use algobench::{report, runner, Algorithm};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let samples = runner::run_experiment(Algorithm::LinearSearch, &[1_000], 10, &mut rng);
//! assert_eq!(samples.len(), 10);
//! report::write_points(std::env::temp_dir().join("linear.json"), &samples)?;
//! # Ok::<(), algobench::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod algorithm;
pub mod error;
pub mod generate;
pub mod report;
pub mod runner;
pub mod timer;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use runner::Sample;

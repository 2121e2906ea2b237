//! Single-invocation wall-clock timer
//!
//! One call to [`time`] is one measurement. Repetition lives in the
//! experiment runner, never here, so every recorded duration maps to
//! exactly one algorithm invocation.

use std::hint::black_box;
use std::time::Instant;

use crate::algorithm::Algorithm;

/// Time one invocation of `algorithm` on `data` with `param`.
///
/// Returns the elapsed wall-clock time in whole nanoseconds. The adapter
/// result is routed through [`black_box`] so the measured call cannot be
/// optimized away. Nothing is allocated between the two timestamps.
pub fn time(algorithm: Algorithm, data: &mut [i32], param: i32) -> u64 {
    let start = Instant::now();
    black_box(algorithm.apply(black_box(data), black_box(param)));
    let elapsed = start.elapsed();
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

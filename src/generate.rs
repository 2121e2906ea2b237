//! Input data generators
//!
//! Every measured invocation gets freshly generated input so one trial
//! cannot leak cache or branch-predictor state into the next through the
//! data itself. Generators take the RNG explicitly; the harness owns a
//! single generator seeded once at startup, and tests supply a fixed seed.

use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a uniformly random permutation of the values `0..size`.
///
/// The result contains every integer in `[0, size)` exactly once, in
/// shuffled order. `size == 0` yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let data = algobench::generate::random_array(&mut rng, 100);
/// assert_eq!(data.len(), 100);
/// ```
#[must_use]
pub fn random_array(rng: &mut impl Rng, size: usize) -> Vec<i32> {
    let mut data = sorted_array(size);
    data.shuffle(rng);
    data
}

/// Generate the values `0..size` in strictly ascending order.
///
/// `size == 0` yields an empty vector.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn sorted_array(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

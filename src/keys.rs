// Key stream generators.
//
// Every benchmark phase walks one of three key distributions. The
// random streams are seeded so that a phase can replay the exact
// sequence it inserted (hit probes) or a disjoint one (miss probes).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for the insert/find-hit streams.
pub const HIT_SEED: u64 = 0;
/// Seed for the find-miss stream.
pub const MISS_SEED: u64 = 1;

/// Endless stream of pseudo-random 32-bit keys, widened to `u64`.
pub fn random(seed: u64) -> impl Iterator<Item = u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    std::iter::repeat_with(move || u64::from(rng.gen::<u32>()))
}

/// 0, 1, 2, ...
pub fn ascending() -> impl Iterator<Item = u64> {
    0u64..
}

/// 0, -1, -2, ... as two's-complement words: 0, u64::MAX, u64::MAX - 1, ...
pub fn descending() -> impl Iterator<Item = u64> {
    (0u64..).map(|i| 0u64.wrapping_sub(i))
}

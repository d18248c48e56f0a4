//! Seeded input pattern generators.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .map(|seed| seed.parse().expect("invalid OVERRIDE_SEED"))
        .unwrap_or_else(|| rand::thread_rng().gen())
});

/// Seed behind all pattern generation. Set `OVERRIDE_SEED` to replay a
/// failing run.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Unconstrained random values.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values drawn uniformly from `range`. A narrow range yields heavy
/// duplication.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Random values under a zipfian distribution, i.e. a skewed value histogram
/// with a few very common values and a long tail.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = zipf::ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![73; len]
}

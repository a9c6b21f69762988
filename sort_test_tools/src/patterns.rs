//! Deterministic input generators.
//!
//! All random generators draw from one seed per process so a failing run can be repeated with
//! `OVERRIDE_SEED=<seed>`. Benchmarks call [`use_random_seed_each_time`] instead.

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use zipf::ZipfDistribution;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Seed {
    /// Drawn once per process.
    Process(u64),
    /// Given through `OVERRIDE_SEED`.
    Override(u64),
    /// Fresh for every generated input.
    PerCall,
}

static SEED: Lazy<Mutex<Seed>> = Lazy::new(|| {
    let seed = match env::var("OVERRIDE_SEED") {
        Ok(val) => Seed::Override(u64::from_str(&val).expect("OVERRIDE_SEED must be a u64")),
        Err(_) => Seed::Process(rand::thread_rng().gen()),
    };

    Mutex::new(seed)
});

/// The seed the next generator call will use.
pub fn random_init_seed() -> u64 {
    match *SEED.lock().unwrap() {
        Seed::Process(seed) | Seed::Override(seed) => seed,
        Seed::PerCall => rand::thread_rng().gen(),
    }
}

/// Makes every generator call produce new values. Only meant for benchmarks.
///
/// # Panics
///
/// Panics if the seed was pinned with `OVERRIDE_SEED`.
pub fn use_random_seed_each_time() {
    let mut seed = SEED.lock().unwrap();
    if let Seed::Override(_) = *seed {
        panic!("OVERRIDE_SEED is set, refusing to switch to a fresh seed per call");
    }

    *seed = Seed::PerCall;
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// A permutation of `1..=len`.
pub fn shuffled(len: usize) -> Vec<i32> {
    let mut v = (1..=len as i32).collect::<Vec<_>>();
    v.shuffle(&mut rng());

    v
}

/// Uniformly distributed over the whole `i32` range, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed over `range`, small ranges give many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    dist.sample_iter(rng()).take(len).collect()
}

/// Zipf distributed over `1..=len`, a few values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).expect("exponent must be positive");

    dist.sample_iter(rng()).take(len).map(|val| val as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![7; len]
}

/// Random values cut into `run_count` runs, each run sorted in a random direction.
pub fn runs(len: usize, run_count: usize) -> Vec<i32> {
    let mut v = random(len);
    let run_len = (len / run_count.max(1)).max(1);

    let mut rng = rng();
    for run in v.chunks_mut(run_len) {
        run.sort_unstable();
        if rng.gen::<bool>() {
            run.reverse();
        }
    }

    v
}

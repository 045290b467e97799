//! Random selection helpers for shuffle
//!
//! Generic over `rand::Rng` so tests can drive them with a seeded
//! generator; the mixer calls them with `thread_rng`.

use rand::Rng;

/// Pick up to `count` distinct ids uniformly at random
///
/// Draw-without-replacement: repeatedly removes a uniformly random
/// element from a working pool until `count` ids are drawn or the pool
/// is exhausted. Never yields duplicates; yields fewer than `count`
/// ids when the pool is smaller.
pub fn pick_distinct<R: Rng + ?Sized>(ids: &[&str], count: usize, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = ids.to_vec();
    let mut picked = Vec::with_capacity(count.min(pool.len()));

    while picked.len() < count && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        picked.push(pool.swap_remove(index).to_string());
    }

    picked
}

/// Uniform random volume in [min, max)
pub fn random_volume<R: Rng + ?Sized>(min: f32, max: f32, rng: &mut R) -> f32 {
    rng.gen_range(min..max)
}

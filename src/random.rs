//! Seeded random source and sampling helpers.
//!
//! Every component that needs randomness takes an explicit `&mut R where
//! R: Rng`. Runs are reproducible because the only generator is built here
//! from a `u64` seed and handed down by the caller.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates the generator used by the runners.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Writes the first `k` entries of a random permutation of `0..n` into
/// `out[..k]`.
///
/// When `k == n` the permutation is built in `out` directly; otherwise a
/// scratch array of length `n` is partially shuffled.
///
/// # Panics
/// Panics if `k > n` or `out.len() < k`.
pub fn make_shuffle<R: Rng>(k: usize, n: usize, out: &mut [usize], rng: &mut R) {
    assert!(k <= n, "cannot draw {k} values from 0..{n}");
    assert!(out.len() >= k, "output buffer too small");

    if k == n {
        for (i, slot) in out[..n].iter_mut().enumerate() {
            *slot = i;
        }
        for i in 0..k {
            let other = rng.random_range(i..n);
            out.swap(i, other);
        }
        return;
    }

    let mut scratch: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let other = rng.random_range(i..n);
        scratch.swap(i, other);
    }
    out[..k].copy_from_slice(&scratch[..k]);
}

/// Picks `k` distinct values from `0..n` into `out[..k]`.
///
/// For `k` close to `n` a partial shuffle is used; for `k <= n / 3`
/// values are drawn uniformly and redrawn on collision, which avoids an
/// O(n) scratch array when only a couple of cuts are needed.
///
/// # Panics
/// Panics if `k > n` or `out.len() < k`.
pub fn pick_k_without_replacement<R: Rng>(k: usize, n: usize, out: &mut [usize], rng: &mut R) {
    assert!(k <= n, "cannot pick {k} unique values from 0..{n}");
    assert!(out.len() >= k, "output buffer too small");

    if k > n / 3 {
        make_shuffle(k, n, out, rng);
        return;
    }

    let mut picked = 0;
    while picked < k {
        let elem = rng.random_range(0..n);
        if !out[..picked].contains(&elem) {
            out[picked] = elem;
            picked += 1;
        }
    }
}

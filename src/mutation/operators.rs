//! Operator implementations and their edge-delta formulas.
//!
//! Position arithmetic is cyclic: the predecessor of position 0 is `n - 1`
//! and the successor of `n - 1` is 0.

use rand::Rng;

use super::types::{Mutation, MutationKind};
use crate::random::pick_k_without_replacement;
use crate::tsp::TspInstance;

/// Smallest instance every operator handles correctly.
///
/// Below three cities the swap and displacement formulas count a single
/// edge twice, and displacement has no admissible cut pair.
pub const MIN_CITIES: usize = 3;

#[inline]
fn prev(i: usize, n: usize) -> usize {
    if i != 0 {
        i - 1
    } else {
        n - 1
    }
}

#[inline]
fn next(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Draws a mutation of the given kind.
pub fn propose<P, R>(
    kind: MutationKind,
    tour: &[usize],
    length: i64,
    problem: &P,
    rng: &mut R,
) -> Mutation
where
    P: TspInstance + ?Sized,
    R: Rng,
{
    match kind {
        MutationKind::DoubleBridge => double_bridge(tour, length, problem, rng),
        MutationKind::Swap => swap(tour, length, problem, rng),
        MutationKind::Displacement => displacement(tour, length, problem, rng),
    }
}

/// Double-bridge move between two distinct random cuts.
pub fn double_bridge<P, R>(tour: &[usize], length: i64, problem: &P, rng: &mut R) -> Mutation
where
    P: TspInstance + ?Sized,
    R: Rng,
{
    let mut cuts = [0usize; 2];
    pick_k_without_replacement(2, tour.len(), &mut cuts, rng);
    double_bridge_at(tour, length, problem, cuts[0], cuts[1])
}

/// Double-bridge move at explicit cuts (in either order).
///
/// Removes `(t[c0-1], t[c0])` and `(t[c1-1], t[c1])`, adds `(t[c0], t[c1])`
/// and `(t[c0-1], t[c1-1])`. Applying reverses `t[c0..c1]`.
///
/// # Panics
/// Panics if the cuts are equal or out of range.
pub fn double_bridge_at<P>(tour: &[usize], length: i64, problem: &P, a: usize, b: usize) -> Mutation
where
    P: TspInstance + ?Sized,
{
    let n = tour.len();
    assert!(a != b && a < n && b < n, "invalid double-bridge cuts ({a}, {b})");
    let (c0, c1) = if a < b { (a, b) } else { (b, a) };
    let d = |i: usize, j: usize| problem.distance(tour[i], tour[j]);

    let p0 = prev(c0, n);
    let removed = d(p0, c0) + d(c1 - 1, c1);
    let added = d(c0, c1) + d(p0, c1 - 1);

    Mutation {
        kind: MutationKind::DoubleBridge,
        cuts: [c0, c1],
        length: length - removed + added,
    }
}

/// Swap of two distinct random positions.
pub fn swap<P, R>(tour: &[usize], length: i64, problem: &P, rng: &mut R) -> Mutation
where
    P: TspInstance + ?Sized,
    R: Rng,
{
    let mut cuts = [0usize; 2];
    pick_k_without_replacement(2, tour.len(), &mut cuts, rng);
    swap_at(tour, length, problem, cuts[0], cuts[1])
}

/// Swap at explicit positions (in either order).
///
/// Positions that are at most two apart, or that are the first and last
/// position, share their inner edges with the swapped tour; only the two
/// outer edges change. Otherwise four boundary edges change.
///
/// # Panics
/// Panics if the positions are equal or out of range.
pub fn swap_at<P>(tour: &[usize], length: i64, problem: &P, a: usize, b: usize) -> Mutation
where
    P: TspInstance + ?Sized,
{
    let n = tour.len();
    assert!(a != b && a < n && b < n, "invalid swap cuts ({a}, {b})");
    let (mut c0, mut c1) = if a < b { (a, b) } else { (b, a) };
    let gap = c1 - c0;
    if gap == n - 1 {
        // first and last position are neighbours through the wrap edge
        std::mem::swap(&mut c0, &mut c1);
    }
    let d = |i: usize, j: usize| problem.distance(tour[i], tour[j]);
    let p0 = prev(c0, n);
    let n1 = next(c1, n);

    let (removed, added) = if gap <= 2 || gap == n - 1 {
        (d(p0, c0) + d(c1, n1), d(p0, c1) + d(c0, n1))
    } else {
        (
            d(p0, c0) + d(c0, c0 + 1) + d(c1 - 1, c1) + d(c1, n1),
            d(p0, c1) + d(c1, c0 + 1) + d(c0, c1 - 1) + d(c0, n1),
        )
    };

    Mutation {
        kind: MutationKind::Swap,
        cuts: [c0, c1],
        length: length - removed + added,
    }
}

/// Displacement of one random city to a random non-adjacent slot.
///
/// Cut pairs that would leave the tour unchanged are redrawn.
pub fn displacement<P, R>(tour: &[usize], length: i64, problem: &P, rng: &mut R) -> Mutation
where
    P: TspInstance + ?Sized,
    R: Rng,
{
    let n = tour.len();
    let mut cuts = [0usize; 2];
    loop {
        pick_k_without_replacement(2, n, &mut cuts, rng);
        if !is_degenerate_displacement(cuts[0], cuts[1], n) {
            break;
        }
    }
    displacement_at(tour, length, problem, cuts[0], cuts[1])
}

/// A city reinserted right before its own successor stays where it is.
#[inline]
fn is_degenerate_displacement(from: usize, to: usize, n: usize) -> bool {
    to == next(from, n)
}

/// Displacement of the city at `from` to just before the city at `to`.
///
/// Removes `(t[from-1], t[from])`, `(t[from], t[from+1])` and
/// `(t[to-1], t[to])`; adds `(t[from-1], t[from+1])`, `(t[to-1], t[from])`
/// and `(t[from], t[to])`.
///
/// # Panics
/// Panics if the positions are equal, out of range, or `to` is the
/// cyclic successor of `from`.
pub fn displacement_at<P>(
    tour: &[usize],
    length: i64,
    problem: &P,
    from: usize,
    to: usize,
) -> Mutation
where
    P: TspInstance + ?Sized,
{
    let n = tour.len();
    assert!(
        from != to && from < n && to < n && !is_degenerate_displacement(from, to, n),
        "invalid displacement cuts ({from}, {to})"
    );
    let d = |i: usize, j: usize| problem.distance(tour[i], tour[j]);
    let pf = prev(from, n);
    let nf = next(from, n);
    let pt = prev(to, n);

    let removed = d(pf, from) + d(from, nf) + d(pt, to);
    let added = d(pf, nf) + d(pt, from) + d(from, to);

    Mutation {
        kind: MutationKind::Displacement,
        cuts: [from, to],
        length: length - removed + added,
    }
}

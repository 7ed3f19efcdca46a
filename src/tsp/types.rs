//! Core trait for symmetric TSP instances.

/// A symmetric TSP instance with integer edge weights.
///
/// Implementations must guarantee `distance(i, j) == distance(j, i)` and
/// `distance(i, j) >= 0` for every pair of cities. The engines never
/// write through this trait, so one instance can be shared by any number
/// of engines and runs.
///
/// # Examples
///
/// ```
/// use u_lahc::tsp::{DistanceMatrix, TspInstance};
///
/// let m = DistanceMatrix::new(vec![
///     vec![0, 1, 2],
///     vec![1, 0, 3],
///     vec![2, 3, 0],
/// ])
/// .unwrap();
/// assert_eq!(m.tour_length(&[0, 1, 2]), 6);
/// ```
pub trait TspInstance: Send + Sync {
    /// Number of cities `n`. Tours are permutations of `0..n`.
    fn num_cities(&self) -> usize;

    /// Edge weight between two cities.
    fn distance(&self, from: usize, to: usize) -> i64;

    /// Length of the closed tour, including the edge back to the start.
    fn tour_length(&self, tour: &[usize]) -> i64 {
        match tour {
            [] | [_] => 0,
            [first, .., last] => {
                let open: i64 = tour.windows(2).map(|w| self.distance(w[0], w[1])).sum();
                open + self.distance(*last, *first)
            }
        }
    }
}

/// Returns `true` if `tour` is a permutation of `0..num_cities`.
pub fn is_valid_tour(tour: &[usize], num_cities: usize) -> bool {
    if tour.len() != num_cities {
        return false;
    }
    let mut seen = vec![false; num_cities];
    for &city in tour {
        if city >= num_cities || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

//! Tour utilities.
//!
//! A tour is a plain `[usize]` permutation of location indices `[0, n)`.
//! It is implicitly closed: the last location connects back to the first.

use crate::distance::DistanceMatrix;
use crate::error::SearchError;

/// Smallest number of locations a tour may visit.
pub const MIN_TOUR_LEN: usize = 3;

/// Computes the closed length of a tour: `Σ d(t[k], t[(k+1) mod n])`.
///
/// Returns `0.0` for an empty tour.
///
/// # Examples
///
/// ```
/// use tsp_tabu::distance::DistanceMatrix;
/// use tsp_tabu::models::tour_length;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    if n == 0 {
        return 0.0;
    }
    let mut length = 0.0;
    for k in 0..n - 1 {
        length += distances.get(tour[k], tour[k + 1]);
    }
    length + distances.get(tour[n - 1], tour[0])
}

/// Checks that `tour` is a permutation of `[0, n)` with `n >= 3`.
pub fn validate_tour(tour: &[usize]) -> Result<(), SearchError> {
    let n = tour.len();
    if n < MIN_TOUR_LEN {
        return Err(SearchError::invalid_tour(format!(
            "a tour needs at least {MIN_TOUR_LEN} locations, got {n}"
        )));
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n {
            return Err(SearchError::invalid_tour(format!(
                "location {city} is out of range for {n} locations"
            )));
        }
        if seen[city] {
            return Err(SearchError::invalid_tour(format!(
                "location {city} appears more than once"
            )));
        }
        seen[city] = true;
    }
    Ok(())
}

/// Applies a 2-opt move in place: reverses tour positions `[i+1, j]`.
///
/// Removes edges `(t[i], t[i+1])` and `(t[j], t[j+1 mod n])`, reconnecting
/// `t[i]–t[j]` and `t[i+1]–t[j+1 mod n]`. Applying the same move twice
/// restores the original tour.
pub fn apply_two_opt(tour: &mut [usize], i: usize, j: usize) {
    let (i, j) = if i <= j { (i, j) } else { (j, i) };
    tour[i + 1..=j].reverse();
}

/// Exchanges the cities at positions `i` and `j` in place.
pub fn apply_swap(tour: &mut [usize], i: usize, j: usize) {
    tour.swap(i, j);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_tour_length_square() {
        let dm = unit_square();
        assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
        // Crossing diagonals: 1 + √2 + 1 + √2
        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&[0, 2, 1, 3], &dm) - crossed).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_includes_closing_edge() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!((tour_length(&[0, 1, 2], &dm) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_empty() {
        let dm = unit_square();
        assert_eq!(tour_length(&[], &dm), 0.0);
    }

    #[test]
    fn test_validate_accepts_permutation() {
        assert!(validate_tour(&[2, 0, 3, 1]).is_ok());
    }

    #[test]
    fn test_validate_rejects_short() {
        assert!(matches!(
            validate_tour(&[0, 1]),
            Err(SearchError::InvalidTour { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        assert!(matches!(
            validate_tour(&[0, 1, 1]),
            Err(SearchError::InvalidTour { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(matches!(
            validate_tour(&[0, 1, 3]),
            Err(SearchError::InvalidTour { .. })
        ));
    }

    #[test]
    fn test_apply_two_opt_reverses_segment() {
        let mut tour = vec![0, 1, 2, 3, 4, 5];
        apply_two_opt(&mut tour, 1, 4);
        assert_eq!(tour, vec![0, 1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_apply_two_opt_wrap_edge() {
        let mut tour = vec![0, 1, 2, 3, 4];
        apply_two_opt(&mut tour, 2, 4);
        assert_eq!(tour, vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_apply_two_opt_argument_order() {
        let mut a = vec![0, 1, 2, 3, 4];
        let mut b = a.clone();
        apply_two_opt(&mut a, 0, 3);
        apply_two_opt(&mut b, 3, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_swap() {
        let mut tour = vec![0, 1, 2, 3];
        apply_swap(&mut tour, 0, 3);
        assert_eq!(tour, vec![3, 1, 2, 0]);
    }
}

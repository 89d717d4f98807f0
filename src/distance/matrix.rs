//! Dense distance matrix.

use crate::models::City;

/// A dense n×n distance matrix stored in row-major order.
///
/// This is the read-only distance provider consumed by the search. It is
/// never mutated during optimization, so one matrix may be shared by any
/// number of concurrent searches.
///
/// # Examples
///
/// ```
/// use tsp_tabu::models::City;
/// use tsp_tabu::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 3.0, 4.0),
///     City::new("C", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        Self::symmetric_from(cities.len(), |i, j| cities[i].distance_to(&cities[j]))
    }

    /// Computes a Euclidean distance matrix from raw `(x, y)` points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self::symmetric_from(points.len(), |i, j| {
            let ((xi, yi), (xj, yj)) = (points[i], points[j]);
            (xi - xj).hypot(yi - yj)
        })
    }

    /// Fills the upper triangle from `distance` and mirrors it.
    fn symmetric_from(n: usize, distance: impl Fn(usize, usize) -> f64) -> Self {
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(i, j);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j)` and `d(j, i)` differ by at most `tol`
    /// for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }

    /// Builds the matrix restricted to `indices`, in the given order.
    ///
    /// Location `k` of the result is location `indices[k]` of `self`.
    pub fn submatrix(&self, indices: &[usize]) -> Self {
        let n = indices.len();
        let mut dm = Self::new(n);
        for (a, &from) in indices.iter().enumerate() {
            for (b, &to) in indices.iter().enumerate() {
                dm.set(a, b, self.get(from, to));
            }
        }
        dm
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![
            City::new("origin", 0.0, 0.0),
            City::new("east", 3.0, 4.0),
            City::new("north", 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_points_matches_cities() {
        let a = DistanceMatrix::from_cities(&sample_cities());
        let b = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]);
        for i in 0..3 {
            for j in 0..3 {
                assert!((a.get(i, j) - b.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_submatrix() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        let sub = dm.submatrix(&[2, 0]);
        assert_eq!(sub.size(), 2);
        assert!((sub.get(0, 1) - 8.0).abs() < 1e-10);
        assert!((sub.get(1, 0) - 8.0).abs() < 1e-10);
        assert_eq!(sub.get(0, 0), 0.0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        // From origin: east is 5 away, north is 8 away
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_prefers_first() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0)]);
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}

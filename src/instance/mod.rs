//! Problem instances: a list of cities and their distance matrix.
//!
//! - [`morocco_cities`] — Built-in 22-city dataset
//! - [`CitySelection`] — Start city plus the cities to visit
//! - [`select_cities`] / [`random_selection`] — Explicit or seeded random selection
//! - [`Instance::subset`] — Sub-instance restricted to a selection

mod cities;
mod selection;

pub use cities::morocco_cities;
pub use selection::{random_selection, select_cities, CitySelection, MIN_OTHER_CITIES};

use crate::distance::DistanceMatrix;
use crate::error::SearchError;
use crate::models::City;

/// Cities together with their precomputed Euclidean distances.
///
/// # Examples
///
/// ```
/// use tsp_tabu::instance::{select_cities, Instance};
///
/// let morocco = Instance::morocco();
/// let selection = select_cities(6, &[7, 0, 8], morocco.len()).unwrap();
/// let (sub, mapping) = morocco.subset(&selection).unwrap();
///
/// assert_eq!(sub.len(), 4);
/// assert_eq!(sub.cities()[0].name(), "Rabat");
/// assert_eq!(mapping, vec![6, 7, 0, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    cities: Vec<City>,
    distances: DistanceMatrix,
}

impl Instance {
    /// Builds an instance and its distance matrix from `cities`.
    pub fn new(cities: Vec<City>) -> Self {
        let distances = DistanceMatrix::from_cities(&cities);
        Self { cities, distances }
    }

    /// Instance over the built-in Moroccan cities.
    pub fn morocco() -> Self {
        Self::new(morocco_cities())
    }

    /// Cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Pairwise distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Restricts the instance to the selected cities.
    ///
    /// The start city becomes index 0 and the others follow in selection
    /// order. The returned mapping gives, for each index of the
    /// sub-instance, the corresponding index in `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidSelection`] if the selection does not
    /// fit this instance.
    pub fn subset(&self, selection: &CitySelection) -> Result<(Self, Vec<usize>), SearchError> {
        selection.validate(self.len())?;
        let mapping = selection.indices();
        let cities = mapping.iter().map(|&i| self.cities[i].clone()).collect();
        let distances = self.distances.submatrix(&mapping);
        tracing::debug!(cities = mapping.len(), "Extracted sub-instance");
        Ok((Self { cities, distances }, mapping))
    }

    /// City names along `tour`.
    ///
    /// Indices outside the instance are skipped.
    pub fn tour_names(&self, tour: &[usize]) -> Vec<&str> {
        tour.iter()
            .filter_map(|&i| self.cities.get(i))
            .map(City::name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor_tour;
    use crate::models::tour_length;
    use crate::tabu::{TabuConfig, TabuRunner};

    #[test]
    fn test_new_builds_matrix() {
        let instance = Instance::new(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 3.0, 4.0),
            City::new("C", 0.0, 4.0),
        ]);
        assert_eq!(instance.len(), 3);
        assert!((instance.distances().get(0, 1) - 5.0).abs() < 1e-10);
        assert!(instance.distances().is_symmetric(1e-12));
    }

    #[test]
    fn test_subset_preserves_distances() {
        let morocco = Instance::morocco();
        let selection = select_cities(12, &[13, 7, 0], morocco.len()).expect("valid");
        let (sub, mapping) = morocco.subset(&selection).expect("fits");

        assert_eq!(
            sub.tour_names(&[0, 1, 2, 3]),
            vec!["Marrakesh", "Agadir", "Casablanca", "Tangier"]
        );
        for a in 0..sub.len() {
            for b in 0..sub.len() {
                let expected = morocco.distances().get(mapping[a], mapping[b]);
                assert!((sub.distances().get(a, b) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_subset_rejects_out_of_range() {
        let instance = Instance::new(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 1.0, 0.0),
            City::new("C", 2.0, 0.0),
        ]);
        let selection = CitySelection {
            start: 0,
            others: vec![1, 5],
        };
        assert!(matches!(
            instance.subset(&selection),
            Err(SearchError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_morocco_end_to_end() {
        let morocco = Instance::morocco();
        let tour = nearest_neighbor_tour(morocco.distances(), 0);
        let initial = tour_length(&tour, morocco.distances());

        let config = TabuConfig::default().with_max_iterations(200);
        let result = TabuRunner::run(&tour, morocco.distances(), &config).expect("valid input");

        assert!(result.best_length <= initial + 1e-9);
        assert_eq!(result.best_tour.len(), 22);
        let names = morocco.tour_names(&result.best_tour);
        assert_eq!(names.len(), 22);
    }
}

//! Choosing which cities take part in a tour.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Minimum number of cities besides the start.
pub const MIN_OTHER_CITIES: usize = 2;

/// A start city plus the other cities to visit, as indices into a city list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySelection {
    /// City the tour begins at.
    pub start: usize,
    /// Remaining cities, in selection order.
    pub others: Vec<usize>,
}

impl CitySelection {
    /// All selected indices, start first.
    pub fn indices(&self) -> Vec<usize> {
        std::iter::once(self.start)
            .chain(self.others.iter().copied())
            .collect()
    }

    /// Number of selected cities including the start.
    pub fn len(&self) -> usize {
        self.others.len() + 1
    }

    /// Always `false`: a selection holds at least its start city.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Checks the selection against a list of `n` cities.
    pub fn validate(&self, n: usize) -> Result<(), SearchError> {
        if self.start >= n {
            return Err(SearchError::invalid_selection(format!(
                "start city {} out of range for {n} cities",
                self.start
            )));
        }
        if self.others.len() < MIN_OTHER_CITIES {
            return Err(SearchError::invalid_selection(format!(
                "need at least {MIN_OTHER_CITIES} cities besides the start, got {}",
                self.others.len()
            )));
        }
        let mut seen = vec![false; n];
        seen[self.start] = true;
        for &city in &self.others {
            if city >= n {
                return Err(SearchError::invalid_selection(format!(
                    "city {city} out of range for {n} cities"
                )));
            }
            if city == self.start {
                return Err(SearchError::invalid_selection(format!(
                    "start city {city} listed among the other cities"
                )));
            }
            if seen[city] {
                return Err(SearchError::invalid_selection(format!(
                    "city {city} selected twice"
                )));
            }
            seen[city] = true;
        }
        Ok(())
    }
}

/// Builds a validated selection from explicit indices into `n` cities.
///
/// # Errors
///
/// Returns [`SearchError::InvalidSelection`] if an index is out of range,
/// the start appears among `others`, an index repeats, or fewer than two
/// other cities are given.
///
/// # Examples
///
/// ```
/// use tsp_tabu::instance::select_cities;
///
/// let selection = select_cities(6, &[7, 8, 0], 22).unwrap();
/// assert_eq!(selection.indices(), vec![6, 7, 8, 0]);
/// assert!(select_cities(6, &[6, 7], 22).is_err());
/// ```
pub fn select_cities(
    start: usize,
    others: &[usize],
    n: usize,
) -> Result<CitySelection, SearchError> {
    let selection = CitySelection {
        start,
        others: others.to_vec(),
    };
    selection.validate(n)?;
    Ok(selection)
}

/// Draws a random start city and between 2 and `n - 1` other cities.
///
/// The draw is fully determined by `rng`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidSelection`] if `n < 3`.
pub fn random_selection<R: Rng>(n: usize, rng: &mut R) -> Result<CitySelection, SearchError> {
    if n < MIN_OTHER_CITIES + 1 {
        return Err(SearchError::invalid_selection(format!(
            "need at least {} cities to choose from, got {n}",
            MIN_OTHER_CITIES + 1
        )));
    }

    let start = rng.random_range(0..n);
    let count = rng.random_range(MIN_OTHER_CITIES..n);
    let pool: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let others: Vec<usize> = pool.choose_multiple(rng, count).copied().collect();

    tracing::debug!(start, others = others.len(), "Random city selection");
    Ok(CitySelection { start, others })
}

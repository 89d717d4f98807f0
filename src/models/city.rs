//! City type.

use serde::{Deserialize, Serialize};

/// A named location in a traveling salesman instance.
///
/// Coordinates are planar; distances between cities are Euclidean.
///
/// # Examples
///
/// ```
/// use tsp_tabu::models::City;
///
/// let rabat = City::new("Rabat", -6.8, 34.0);
/// assert_eq!(rabat.name(), "Rabat");
/// assert_eq!(rabat.x(), -6.8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate (longitude for geographic data).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate (latitude for geographic data).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

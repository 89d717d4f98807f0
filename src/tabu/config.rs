//! Tabu Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

use super::tenure::TabuTenure;

/// Configuration parameters for Tabu Search.
///
/// Every field has a default, so partial documents deserialize cleanly.
///
/// # Examples
///
/// ```
/// use tsp_tabu::tabu::{TabuConfig, TabuTenure};
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(TabuTenure::Sqrt)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, TabuTenure::Sqrt);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// How many iterations a move stays in the tabu memory.
    pub tabu_tenure: TabuTenure,
    /// Hard cap on iterations.
    pub max_iterations: usize,
    /// Wall-clock budget in seconds. `f64::INFINITY` disables the limit.
    pub time_limit: f64,
    /// Whether a tabu move may be taken when it beats the best-known length.
    pub aspiration_enabled: bool,
    /// Iterations without a new best before stopping.
    /// Defaults to twice the resolved tenure.
    pub max_no_improvement: Option<usize>,
    /// Whether tenure adapts to stagnation.
    pub dynamic_tabu: bool,
    /// Stagnation above which tenure shrinks (when `dynamic_tabu` is set).
    pub intensification_threshold: usize,
    /// Stagnation above which tenure grows (when `dynamic_tabu` is set).
    pub diversification_threshold: usize,
    /// Whether the city-swap neighborhood is searched as well.
    pub use_swap: bool,
    /// When swaps are enabled, only scan them if no admissible 2-opt move exists.
    pub prioritize_two_opt: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_tenure: TabuTenure::default(),
            max_iterations: 1000,
            time_limit: 60.0,
            aspiration_enabled: true,
            max_no_improvement: None,
            dynamic_tabu: false,
            intensification_threshold: 20,
            diversification_threshold: 50,
            use_swap: false,
            prioritize_two_opt: true,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu tenure (literal or size-derived strategy).
    pub fn with_tabu_tenure(mut self, tenure: impl Into<TabuTenure>) -> Self {
        self.tabu_tenure = tenure.into();
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the wall-clock budget in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = seconds;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, enabled: bool) -> Self {
        self.aspiration_enabled = enabled;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = Some(n);
        self
    }

    /// Enables or disables adaptive tenure.
    pub fn with_dynamic_tabu(mut self, enabled: bool) -> Self {
        self.dynamic_tabu = enabled;
        self
    }

    /// Sets the intensification and diversification thresholds.
    pub fn with_thresholds(mut self, intensification: usize, diversification: usize) -> Self {
        self.intensification_threshold = intensification;
        self.diversification_threshold = diversification;
        self
    }

    /// Enables or disables the swap neighborhood.
    pub fn with_swap(mut self, enabled: bool) -> Self {
        self.use_swap = enabled;
        self
    }

    /// Sets whether 2-opt moves take priority over swaps.
    pub fn with_prioritize_two_opt(mut self, enabled: bool) -> Self {
        self.prioritize_two_opt = enabled;
        self
    }

    /// Checks values that cannot be clamped into something meaningful.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.time_limit.is_nan() || self.time_limit < 0.0 {
            return Err(SearchError::invalid_configuration(format!(
                "time limit must be a non-negative number of seconds, got {}",
                self.time_limit
            )));
        }
        if self.max_no_improvement == Some(0) {
            return Err(SearchError::invalid_configuration(
                "max_no_improvement must be at least 1",
            ));
        }
        if self.dynamic_tabu {
            if self.intensification_threshold < 1 {
                return Err(SearchError::invalid_configuration(
                    "intensification threshold must be at least 1",
                ));
            }
            if self.diversification_threshold <= self.intensification_threshold {
                return Err(SearchError::invalid_configuration(format!(
                    "diversification threshold ({}) must exceed intensification threshold ({})",
                    self.diversification_threshold, self.intensification_threshold
                )));
            }
        }
        Ok(())
    }

    /// Wall-clock budget, or `None` when unlimited.
    pub fn time_budget(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.time_limit).ok()
    }

    /// Parses a configuration from JSON, filling missing fields with defaults.
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| SearchError::invalid_configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

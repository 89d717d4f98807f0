//! Tabu tenure specification and resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tenure used when a strategy tag is not recognized.
pub const DEFAULT_TENURE: usize = 10;

/// How long an applied move stays forbidden.
///
/// Either a literal number of iterations or a strategy derived from the
/// problem size `n`, resolved once when the search starts.
///
/// Deserializes from an integer (`7`) or a string tag (`"sqrt"`, `"log"`,
/// or a numeric string). Unrecognized tags fall back to
/// [`DEFAULT_TENURE`] with a logged warning instead of failing.
///
/// # Examples
///
/// ```
/// use tsp_tabu::tabu::TabuTenure;
///
/// assert_eq!(TabuTenure::Sqrt.resolve(100), 10);
/// assert_eq!(TabuTenure::Log.resolve(100), 14);
/// assert_eq!(TabuTenure::Fixed(0).resolve(100), 1);
/// assert_eq!(TabuTenure::parse("bogus"), TabuTenure::Fixed(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TenureRepr", into = "TenureRepr")]
pub enum TabuTenure {
    /// A fixed number of iterations.
    Fixed(usize),
    /// `round(sqrt(n))`.
    Sqrt,
    /// `round(3 * ln(n))`.
    Log,
}

impl TabuTenure {
    /// Parses a tenure from text.
    ///
    /// Accepts `"sqrt"`, `"log"` (case-insensitive) or a non-negative
    /// integer. Anything else resolves to [`DEFAULT_TENURE`].
    pub fn parse(text: &str) -> Self {
        let tag = text.trim();
        if tag.eq_ignore_ascii_case("sqrt") {
            return Self::Sqrt;
        }
        if tag.eq_ignore_ascii_case("log") {
            return Self::Log;
        }
        match tag.parse::<usize>() {
            Ok(value) => Self::Fixed(value),
            Err(_) => {
                tracing::warn!(
                    tag,
                    fallback = DEFAULT_TENURE,
                    "unrecognized tabu tenure, using default"
                );
                Self::Fixed(DEFAULT_TENURE)
            }
        }
    }

    /// Resolves the tenure for a problem with `n` locations, clamped to at least 1.
    pub fn resolve(&self, n: usize) -> usize {
        let size = n as f64;
        let tenure = match *self {
            Self::Fixed(value) => value,
            Self::Sqrt => size.sqrt().round() as usize,
            Self::Log if n > 1 => (3.0 * size.ln()).round() as usize,
            Self::Log => 0,
        };
        tenure.max(1)
    }
}

impl Default for TabuTenure {
    fn default() -> Self {
        Self::Fixed(DEFAULT_TENURE)
    }
}

impl From<usize> for TabuTenure {
    fn from(value: usize) -> Self {
        Self::Fixed(value)
    }
}

impl From<&str> for TabuTenure {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for TabuTenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Sqrt => f.write_str("sqrt"),
            Self::Log => f.write_str("log"),
        }
    }
}

/// Wire form: a bare integer or a string tag.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TenureRepr {
    Number(i64),
    Tag(String),
}

impl From<TenureRepr> for TabuTenure {
    fn from(repr: TenureRepr) -> Self {
        match repr {
            // Negative literals clamp to the minimum at resolution time.
            TenureRepr::Number(value) => Self::Fixed(usize::try_from(value).unwrap_or(0)),
            TenureRepr::Tag(tag) => Self::parse(&tag),
        }
    }
}

impl From<TabuTenure> for TenureRepr {
    fn from(tenure: TabuTenure) -> Self {
        match tenure {
            TabuTenure::Fixed(value) => {
                TenureRepr::Number(i64::try_from(value).unwrap_or(i64::MAX))
            }
            TabuTenure::Sqrt => TenureRepr::Tag("sqrt".to_string()),
            TabuTenure::Log => TenureRepr::Tag("log".to_string()),
        }
    }
}

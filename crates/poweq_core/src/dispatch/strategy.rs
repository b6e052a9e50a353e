//! Solver strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::types::SolveError;

/// Which solver(s) the dispatcher runs.
///
/// Parsing from text is the only way to obtain
/// [`SolveError::UnknownAlgorithm`]; inside the engine the strategy is
/// always one of these variants.
///
/// # Examples
///
/// ```
/// use poweq_core::dispatch::Strategy;
///
/// let s: Strategy = "Bisection".parse().unwrap();
/// assert_eq!(s, Strategy::Bisection);
/// assert!("secant".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Newton-Raphson from every seed.
    Newton,
    /// Bisection over every sub-interval.
    Bisection,
    /// Newton first, bisection too if no Newton attempt found a root.
    #[default]
    Auto,
}

impl Strategy {
    /// All strategies, in documentation order.
    pub const ALL: [Strategy; 3] = [Strategy::Newton, Strategy::Bisection, Strategy::Auto];

    /// Lowercase name used on the command line and in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Newton => "newton",
            Strategy::Bisection => "bisection",
            Strategy::Auto => "auto",
        }
    }
}

impl FromStr for Strategy {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newton" => Ok(Strategy::Newton),
            "bisection" => Ok(Strategy::Bisection),
            "auto" => Ok(Strategy::Auto),
            _ => Err(SolveError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

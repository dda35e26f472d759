//! Orientation value object: whether payoffs are gains or costs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Problem orientation. Decides what "best" means for every criterion.
///
/// All max/min branching goes through [`Orientation::best`] and
/// [`Orientation::worst`] so that no criterion re-implements it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Payoffs are gains; larger is better.
    #[default]
    #[serde(alias = "max")]
    Gain,
    /// Payoffs are costs; smaller is better.
    #[serde(alias = "min")]
    Cost,
}

impl Orientation {
    /// Returns the best of `values`: max for gains, min for costs.
    ///
    /// An empty slice yields the identity of the fold (-inf for gains,
    /// +inf for costs). Validated matrices never produce one.
    pub fn best(&self, values: &[f64]) -> f64 {
        match self {
            Orientation::Gain => max_of(values),
            Orientation::Cost => min_of(values),
        }
    }

    /// Returns the worst of `values`: min for gains, max for costs.
    pub fn worst(&self, values: &[f64]) -> f64 {
        match self {
            Orientation::Gain => min_of(values),
            Orientation::Cost => max_of(values),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Gain => "gain",
            Orientation::Cost => "cost",
        }
    }
}

/// Minimum of a slice. Loss-type scores (regret, EOL) are always minimised.
pub(crate) fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gain" | "max" => Ok(Orientation::Gain),
            "cost" | "min" => Ok(Orientation::Cost),
            other => Err(format!("Unknown orientation '{}', expected gain or cost", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_best_is_max_and_worst_is_min() {
        let values = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(Orientation::Gain.best(&values), 7.5);
        assert_eq!(Orientation::Gain.worst(&values), -1.0);
    }

    #[test]
    fn cost_best_is_min_and_worst_is_max() {
        let values = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(Orientation::Cost.best(&values), -1.0);
        assert_eq!(Orientation::Cost.worst(&values), 7.5);
    }

    #[test]
    fn single_value_is_both_best_and_worst() {
        for orientation in [Orientation::Gain, Orientation::Cost] {
            assert_eq!(orientation.best(&[4.0]), 4.0);
            assert_eq!(orientation.worst(&[4.0]), 4.0);
        }
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("gain".parse::<Orientation>().unwrap(), Orientation::Gain);
        assert_eq!(" COST ".parse::<Orientation>().unwrap(), Orientation::Cost);
        assert_eq!("max".parse::<Orientation>().unwrap(), Orientation::Gain);
        assert_eq!("min".parse::<Orientation>().unwrap(), Orientation::Cost);
        assert!("profit".parse::<Orientation>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Orientation::Cost).unwrap(), "\"cost\"");
    }

    #[test]
    fn deserializes_aliases() {
        let o: Orientation = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(o, Orientation::Gain);
        let o: Orientation = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(o, Orientation::Cost);
    }

    #[test]
    fn default_is_gain() {
        assert_eq!(Orientation::default(), Orientation::Gain);
    }
}

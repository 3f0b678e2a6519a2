//! Qualitative verdict tiers for a habitability score

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Five-tier habitability verdict
///
/// Thresholds are checked from the top down and the first match wins:
///
/// | Verdict               | Score  |
/// |-----------------------|--------|
/// | Highly Habitable      | ≥ 85   |
/// | Very Habitable        | ≥ 70   |
/// | Potentially Habitable | ≥ 50   |
/// | Marginally Habitable  | ≥ 30   |
/// | Not Habitable         | < 30   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Verdict {
    NotHabitable,
    MarginallyHabitable,
    PotentiallyHabitable,
    VeryHabitable,
    HighlyHabitable,
}

impl Verdict {
    pub const HIGHLY_HABITABLE_THRESHOLD: f64 = 85.0;
    pub const VERY_HABITABLE_THRESHOLD: f64 = 70.0;
    pub const POTENTIALLY_HABITABLE_THRESHOLD: f64 = 50.0;
    pub const MARGINALLY_HABITABLE_THRESHOLD: f64 = 30.0;

    /// Classify a summed score
    ///
    /// # Examples
    /// ```
    /// use habitability::Verdict;
    ///
    /// assert_eq!(Verdict::from_score(85.0), Verdict::HighlyHabitable);
    /// assert_eq!(Verdict::from_score(84.0), Verdict::VeryHabitable);
    /// assert_eq!(Verdict::from_score(110.0), Verdict::HighlyHabitable);
    /// ```
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= Self::HIGHLY_HABITABLE_THRESHOLD => Self::HighlyHabitable,
            s if s >= Self::VERY_HABITABLE_THRESHOLD => Self::VeryHabitable,
            s if s >= Self::POTENTIALLY_HABITABLE_THRESHOLD => Self::PotentiallyHabitable,
            s if s >= Self::MARGINALLY_HABITABLE_THRESHOLD => Self::MarginallyHabitable,
            _ => Self::NotHabitable,
        }
    }

    /// Short tier name
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyHabitable => "Highly Habitable",
            Self::VeryHabitable => "Very Habitable",
            Self::PotentiallyHabitable => "Potentially Habitable",
            Self::MarginallyHabitable => "Marginally Habitable",
            Self::NotHabitable => "Not Habitable",
        }
    }

    /// Descriptive clause that accompanies the label
    pub fn summary(&self) -> &'static str {
        match self {
            Self::HighlyHabitable => "Excellent conditions for complex life!",
            Self::VeryHabitable => "Strong potential for life as we know it",
            Self::PotentiallyHabitable => "Some challenges but life is possible",
            Self::MarginallyHabitable => "Extreme conditions, only extremophiles",
            Self::NotHabitable => "Too many unfavorable conditions",
        }
    }

    /// Lowest score that earns this verdict
    pub fn min_score(&self) -> f64 {
        match self {
            Self::HighlyHabitable => Self::HIGHLY_HABITABLE_THRESHOLD,
            Self::VeryHabitable => Self::VERY_HABITABLE_THRESHOLD,
            Self::PotentiallyHabitable => Self::POTENTIALLY_HABITABLE_THRESHOLD,
            Self::MarginallyHabitable => Self::MARGINALLY_HABITABLE_THRESHOLD,
            Self::NotHabitable => f64::NEG_INFINITY,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.summary())
    }
}

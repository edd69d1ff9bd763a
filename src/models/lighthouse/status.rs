use serde::{Deserialize, Serialize};
use std::fmt;

// Qualitative classification of a metric value
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    Good,
    NeedsImprovement,
    Poor,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let band_str = match self {
            Band::Good => "good",
            Band::NeedsImprovement => "needs-improvement",
            Band::Poor => "poor",
        };
        write!(f, "{}", band_str)
    }
}

// Classification of a category score delta between two aggregated results
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Improvement,
    Regression,
    Neutral,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict_str = match self {
            Verdict::Improvement => "improvement",
            Verdict::Regression => "regression",
            Verdict::Neutral => "neutral",
        };
        write!(f, "{}", verdict_str)
    }
}

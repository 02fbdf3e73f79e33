use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the average score for a "Yes".
pub const YES_THRESHOLD: f64 = 75.0;
/// Lower bound (inclusive) of the average score for a "Maybe".
pub const MAYBE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    Maybe,
    ConsiderAlternatives,
}

impl Recommendation {
    pub fn from_average(average: f64) -> Self {
        if average >= YES_THRESHOLD {
            Self::Yes
        } else if average >= MAYBE_THRESHOLD {
            Self::Maybe
        } else {
            Self::ConsiderAlternatives
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Maybe => "Maybe",
            Self::ConsiderAlternatives => "Consider Alternatives",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Yes => "You show excellent potential for a career as a Market Research Analyst!",
            Self::Maybe => "You have good potential but may benefit from additional preparation.",
            Self::ConsiderAlternatives => {
                "Consider exploring related roles or building foundational skills first."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Strong,
    Moderate,
    Emerging,
}

impl MatchStrength {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 70.0 {
            Self::Strong
        } else if percent >= 50.0 {
            Self::Moderate
        } else {
            Self::Emerging
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Emerging => "Emerging",
        }
    }
}

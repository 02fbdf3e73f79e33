use super::super::scoring::{CombinedScores, FinalScores};
use super::views::AssessmentResults;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Downloadable snapshot of a finished assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub scores: FinalScores,
    pub sections: CombinedScores,
    pub results: AssessmentResults,
}

impl AssessmentReport {
    pub fn new(scores: &CombinedScores, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            scores: scores.final_scores(),
            sections: scores.clone(),
            results: super::render(scores),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

use super::super::domain::WiscarDimension;
use super::recommendation::{MatchStrength, Recommendation};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreScoreEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub score: f64,
    pub rounded: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionEntry {
    pub dimension: WiscarDimension,
    pub letter: char,
    pub name: &'static str,
    pub description: &'static str,
    pub score: f64,
    pub rounded: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch {
    pub title: &'static str,
    pub description: &'static str,
    pub match_percent: f64,
    pub rounded: u8,
    pub strength: MatchStrength,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPhase {
    pub step: u8,
    pub title: &'static str,
    pub topics: Vec<&'static str>,
}

/// Everything the results screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResults {
    pub tier: Recommendation,
    pub tier_label: &'static str,
    pub message: &'static str,
    pub average_score: f64,
    pub confidence_percent: u8,
    pub core_scores: Vec<CoreScoreEntry>,
    pub dimension_breakdown: Vec<DimensionEntry>,
    pub job_matches: Vec<JobMatch>,
    pub learning_path: Vec<LearningPhase>,
}

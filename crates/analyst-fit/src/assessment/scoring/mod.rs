mod combined;
mod likert;
mod technical;

pub use combined::{CombinedScores, FinalScores};
pub use likert::{score_psychometric, score_wiscar, PsychometricScore, WiscarScore};
pub use technical::{score_technical, TechnicalScore};

use super::answers::AnswerSet;
use super::domain::{Question, Section};
use serde::Serialize;

/// Score record emitted by a completed section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionScore {
    Psychometric(PsychometricScore),
    Technical(TechnicalScore),
    Wiscar(WiscarScore),
}

impl SectionScore {
    pub fn section(&self) -> Section {
        match self {
            Self::Psychometric(_) => Section::Psychometric,
            Self::Technical(_) => Section::Technical,
            Self::Wiscar(_) => Section::Wiscar,
        }
    }

    /// Headline value of the section (fit, readiness or confidence).
    pub fn headline(&self) -> f64 {
        match self {
            Self::Psychometric(score) => score.psychometric_fit,
            Self::Technical(score) => score.technical_readiness,
            Self::Wiscar(score) => score.overall_confidence,
        }
    }
}

/// Runs the scorer that belongs to `section`.
pub fn score_section(section: Section, questions: &[Question], answers: &AnswerSet) -> SectionScore {
    match section {
        Section::Psychometric => SectionScore::Psychometric(score_psychometric(questions, answers)),
        Section::Technical => SectionScore::Technical(score_technical(questions, answers)),
        Section::Wiscar => SectionScore::Wiscar(score_wiscar(questions, answers)),
    }
}

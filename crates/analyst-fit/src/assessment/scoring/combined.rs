use super::likert::{PsychometricScore, WiscarScore};
use super::technical::TechnicalScore;
use super::SectionScore;
use serde::{Deserialize, Serialize};

/// Accumulated section records for one session.
///
/// Each completed section fills its own slot; other slots are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombinedScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychometric: Option<PsychometricScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiscar: Option<WiscarScore>,
}

impl CombinedScores {
    pub fn merge(&mut self, score: SectionScore) {
        match score {
            SectionScore::Psychometric(score) => self.psychometric = Some(score),
            SectionScore::Technical(score) => self.technical = Some(score),
            SectionScore::Wiscar(score) => self.wiscar = Some(score),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.psychometric.is_none() && self.technical.is_none() && self.wiscar.is_none()
    }

    /// Flattened values consumed by the results stage; anything missing reads as zero.
    pub fn final_scores(&self) -> FinalScores {
        let psychometric = self.psychometric.clone().unwrap_or_default();
        let technical = self.technical.clone().unwrap_or_default();
        let wiscar = self.wiscar.clone().unwrap_or_default();

        FinalScores {
            psychometric_fit: psychometric.psychometric_fit,
            technical_readiness: technical.technical_readiness,
            overall_confidence: wiscar.overall_confidence,
            w_score: wiscar.w_score.unwrap_or_default(),
            i_score: wiscar.i_score.unwrap_or_default(),
            s_score: wiscar.s_score.unwrap_or_default(),
            c_score: wiscar.c_score.unwrap_or_default(),
            a_score: wiscar.a_score.unwrap_or_default(),
            r_score: wiscar.r_score.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinalScores {
    pub psychometric_fit: f64,
    pub technical_readiness: f64,
    pub overall_confidence: f64,
    pub w_score: f64,
    pub i_score: f64,
    pub s_score: f64,
    pub c_score: f64,
    pub a_score: f64,
    pub r_score: f64,
}

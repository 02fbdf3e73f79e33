use super::super::answers::AnswerSet;
use super::super::domain::{Question, QuestionTag, TechnicalKind};
use serde::{Deserialize, Serialize};

/// Percent-correct results for the technical section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalScore {
    pub technical_readiness: f64,
    pub aptitude_score: f64,
    pub prerequisite_score: f64,
    pub domain_score: f64,
}

impl TechnicalScore {
    pub fn kind(&self, kind: TechnicalKind) -> f64 {
        match kind {
            TechnicalKind::Aptitude => self.aptitude_score,
            TechnicalKind::Prerequisite => self.prerequisite_score,
            TechnicalKind::Domain => self.domain_score,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    correct: u32,
    total: u32,
}

impl Tally {
    fn percent(self) -> f64 {
        f64::from(self.correct) / f64::from(self.total.max(1)) * 100.0
    }
}

/// Totals always count every question; an unanswered question is an incorrect one.
pub fn score_technical(questions: &[Question], answers: &AnswerSet) -> TechnicalScore {
    let mut overall = Tally::default();
    let mut aptitude = Tally::default();
    let mut prerequisite = Tally::default();
    let mut domain = Tally::default();

    for question in questions {
        let QuestionTag::Technical { kind } = question.tag else {
            continue;
        };
        let bucket = match kind {
            TechnicalKind::Aptitude => &mut aptitude,
            TechnicalKind::Prerequisite => &mut prerequisite,
            TechnicalKind::Domain => &mut domain,
        };

        overall.total += 1;
        bucket.total += 1;

        let is_correct = match (answers.get(question.id), question.correct_option()) {
            (Some(selected), Some(option)) => selected == option.value,
            _ => false,
        };
        if is_correct {
            overall.correct += 1;
            bucket.correct += 1;
        }
    }

    TechnicalScore {
        technical_readiness: overall.percent(),
        aptitude_score: aptitude.percent(),
        prerequisite_score: prerequisite.percent(),
        domain_score: domain.percent(),
    }
}

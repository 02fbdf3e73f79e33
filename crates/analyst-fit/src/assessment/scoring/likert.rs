use super::super::answers::AnswerSet;
use super::super::domain::{
    PsychometricCategory, Question, QuestionTag, WiscarDimension, LIKERT_MAX,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Per-category agreement percentages for the psychometric section.
///
/// Categories without a single answered question are `None` and do not take part in
/// `psychometric_fit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsychometricScore {
    pub psychometric_fit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive: Option<f64>,
}

impl PsychometricScore {
    pub fn category(&self, category: PsychometricCategory) -> Option<f64> {
        match category {
            PsychometricCategory::Interest => self.interest,
            PsychometricCategory::Personality => self.personality,
            PsychometricCategory::Motivation => self.motivation,
            PsychometricCategory::Cognitive => self.cognitive,
        }
    }
}

/// Per-dimension agreement percentages for the WISCAR section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WiscarScore {
    pub overall_confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_score: Option<f64>,
}

impl WiscarScore {
    pub fn dimension(&self, dimension: WiscarDimension) -> Option<f64> {
        match dimension {
            WiscarDimension::Will => self.w_score,
            WiscarDimension::Interest => self.i_score,
            WiscarDimension::Skill => self.s_score,
            WiscarDimension::Cognitive => self.c_score,
            WiscarDimension::AbilityToLearn => self.a_score,
            WiscarDimension::RealWorld => self.r_score,
        }
    }
}

pub(crate) struct LikertTally<K> {
    pub groups: BTreeMap<K, f64>,
    pub overall: f64,
}

/// Reads a Likert answer; anything outside 1..=5 is not an interpretable answer.
pub(crate) fn parse_likert(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|rating| (1..=LIKERT_MAX).contains(rating))
}

pub(crate) fn aggregate<K, F>(questions: &[Question], answers: &AnswerSet, group_of: F) -> LikertTally<K>
where
    K: Ord + Copy,
    F: Fn(&QuestionTag) -> Option<K>,
{
    let mut sums: BTreeMap<K, (u32, u32)> = BTreeMap::new();

    for question in questions {
        let Some(group) = group_of(&question.tag) else {
            continue;
        };
        let Some(raw) = answers.get(question.id) else {
            continue;
        };
        let Some(rating) = parse_likert(raw) else {
            warn!(question = question.id, value = raw, "ignoring unreadable likert answer");
            continue;
        };

        let entry = sums.entry(group).or_insert((0, 0));
        entry.0 += u32::from(rating);
        entry.1 += 1;
    }

    let groups: BTreeMap<K, f64> = sums
        .into_iter()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(group, (sum, count))| {
            let score = f64::from(sum) / (f64::from(count) * f64::from(LIKERT_MAX)) * 100.0;
            (group, score)
        })
        .collect();

    let overall = if groups.is_empty() {
        0.0
    } else {
        groups.values().sum::<f64>() / groups.len() as f64
    };

    LikertTally { groups, overall }
}

pub fn score_psychometric(questions: &[Question], answers: &AnswerSet) -> PsychometricScore {
    let tally = aggregate(questions, answers, |tag| match tag {
        QuestionTag::Psychometric { category, .. } => Some(*category),
        _ => None,
    });

    PsychometricScore {
        psychometric_fit: tally.overall,
        interest: tally.groups.get(&PsychometricCategory::Interest).copied(),
        personality: tally.groups.get(&PsychometricCategory::Personality).copied(),
        motivation: tally.groups.get(&PsychometricCategory::Motivation).copied(),
        cognitive: tally.groups.get(&PsychometricCategory::Cognitive).copied(),
    }
}

pub fn score_wiscar(questions: &[Question], answers: &AnswerSet) -> WiscarScore {
    let tally = aggregate(questions, answers, |tag| match tag {
        QuestionTag::Wiscar { dimension } => Some(*dimension),
        _ => None,
    });
    let get = |dimension: WiscarDimension| tally.groups.get(&dimension).copied();

    WiscarScore {
        overall_confidence: tally.overall,
        w_score: get(WiscarDimension::Will),
        i_score: get(WiscarDimension::Interest),
        s_score: get(WiscarDimension::Skill),
        c_score: get(WiscarDimension::Cognitive),
        a_score: get(WiscarDimension::AbilityToLearn),
        r_score: get(WiscarDimension::RealWorld),
    }
}

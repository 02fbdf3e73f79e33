use super::common::*;
use crate::assessment::{
    AnswerPolicy, AnswerSheet, AssessmentSession, AssessmentStage, Recommendation, Section,
    SessionError, ValidationError,
};
use std::collections::BTreeMap;

#[test]
fn best_answers_everywhere_yield_a_yes() {
    let session = completed_with_best_answers();

    let scores = session.scores().final_scores();
    assert_eq!(scores.psychometric_fit, 100.0);
    assert_eq!(scores.technical_readiness, 100.0);
    assert_eq!(scores.overall_confidence, 100.0);

    let results = session.results().expect("results available");
    assert_eq!(results.tier, Recommendation::Yes);
    assert_eq!(results.confidence_percent, 100);
}

#[test]
fn lowest_answers_and_wrong_technical_options_yield_consider_alternatives() {
    let mut session = at_psychometric();
    session = finish_section(session, |_| "1");
    session = finish_section(session, |_| "a");
    session = finish_section(session, |_| "1");

    assert_eq!(session.stage(), AssessmentStage::Results);
    let scores = session.scores().final_scores();
    assert_eq!(scores.psychometric_fit, 20.0);
    // "a" is never the keyed option in the standard bank
    assert_eq!(scores.technical_readiness, 0.0);
    assert_eq!(scores.overall_confidence, 20.0);
    assert_eq!(
        session.results().expect("results").tier,
        Recommendation::ConsiderAlternatives
    );
}

#[test]
fn restart_clears_scores_and_returns_to_hero() {
    let finished = completed_with_best_answers();
    let restarted = finished.restart().expect("restart from results");

    assert_eq!(restarted.stage(), AssessmentStage::Hero);
    assert!(restarted.scores().is_empty());
    assert!(restarted.runner().is_none());
    assert!(restarted.results().is_none());
    // the finished session value is untouched
    assert!(!finished.scores().is_empty());
}

#[test]
fn only_the_latest_selection_counts() {
    let session = at_psychometric();
    let session = session
        .select("1")
        .and_then(|s| s.select("2"))
        .and_then(|s| s.select("5"))
        .expect("selections accepted");
    assert_eq!(session.current_answer(), Some("5"));

    let session = finish_section(session.next().expect("advance"), |_| "5");
    let psychometric = session.scores().psychometric.clone().expect("scored");
    assert_eq!(psychometric.psychometric_fit, 100.0);
}

#[test]
fn replay_reaches_results_from_a_complete_sheet() {
    let bank = bank();
    let mut answers = BTreeMap::new();
    for section in Section::ordered() {
        for question in bank.questions(section) {
            let value = match question.correct_option() {
                Some(option) => option.value,
                None => "4",
            };
            answers.insert(question.id.to_string(), value.to_string());
        }
    }
    let sheet = AnswerSheet::from_map(&bank, answers).expect("valid sheet");

    let session =
        AssessmentSession::replay(bank, &sheet, AnswerPolicy::Strict).expect("replay succeeds");

    assert_eq!(session.stage(), AssessmentStage::Results);
    let scores = session.scores().final_scores();
    assert_eq!(scores.psychometric_fit, 80.0);
    assert_eq!(scores.technical_readiness, 100.0);
    assert_eq!(scores.overall_confidence, 80.0);
}

#[test]
fn replay_stops_at_the_first_missing_answer() {
    let bank = bank();
    let answers: BTreeMap<String, String> = [("p1", "5"), ("p2", "5")]
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect();
    let sheet = AnswerSheet::from_map(&bank, answers).expect("valid sheet");

    let err = AssessmentSession::replay(bank, &sheet, AnswerPolicy::Strict)
        .expect_err("sheet is incomplete");

    assert_eq!(
        err,
        SessionError::Incomplete {
            section: Section::Psychometric,
            question_id: "p3".to_string(),
        }
    );
}

#[test]
fn replay_rejects_invalid_values_under_strict_policy() {
    let bank = bank();
    let answers: BTreeMap<String, String> = [("p1", "9")]
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect();
    let sheet = AnswerSheet::from_map(&bank, answers).expect("ids are valid");

    let err = AssessmentSession::replay(bank, &sheet, AnswerPolicy::Strict)
        .expect_err("9 is off the scale");

    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::InvalidOption { .. })
    ));
}

use super::answers::AnswerSet;
use super::domain::{AnswerPolicy, Question, QuestionView, Section, ValidationError};
use super::scoring::{score_section, SectionScore};
use serde::Serialize;
use tracing::debug;

/// Position within a section's question list, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

/// Result of asking a runner to move forward.
#[derive(Debug)]
pub enum Advance {
    Moved(SectionRunner),
    /// The current question has no answer; the runner is returned unchanged.
    Blocked(SectionRunner),
    Completed(SectionScore),
}

/// Walks one section's questions one at a time and collects the answers.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRunner {
    section: Section,
    questions: Vec<Question>,
    current_index: usize,
    answers: AnswerSet,
    policy: AnswerPolicy,
}

impl SectionRunner {
    pub fn new(section: Section, questions: &[Question], policy: AnswerPolicy) -> Self {
        Self {
            section,
            questions: questions.to_vec(),
            current_index: 0,
            answers: AnswerSet::new(),
            policy,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_view(&self) -> Option<QuestionView> {
        self.current_question().map(Question::view)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id))
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: (self.current_index + 1).min(self.questions.len()),
            total: self.questions.len(),
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Whether `go_to_next` would do anything.
    pub fn can_advance(&self) -> bool {
        self.questions.is_empty() || self.current_answer().is_some()
    }

    pub fn select_answer(&mut self, value: &str) -> Result<(), ValidationError> {
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(ValidationError::NoActiveQuestion)?;

        if self.policy == AnswerPolicy::Strict {
            question.validate(value)?;
        }

        let id = question.id;
        self.answers.record(id, value);
        Ok(())
    }

    pub fn go_to_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn go_to_next(mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked(self);
        }

        if self.is_last_question() {
            let score = score_section(self.section, &self.questions, &self.answers);
            debug!(
                section = self.section.key(),
                answered = self.answers.len(),
                headline = score.headline(),
                "section completed"
            );
            return Advance::Completed(score);
        }

        self.current_index += 1;
        Advance::Moved(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::bank::QuestionBank;

    fn runner(section: Section, policy: AnswerPolicy) -> SectionRunner {
        let bank = QuestionBank::standard();
        SectionRunner::new(section, bank.questions(section), policy)
    }

    fn expect_moved(advance: Advance) -> SectionRunner {
        match advance {
            Advance::Moved(runner) => runner,
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn next_is_blocked_until_the_question_is_answered() {
        for section in Section::ordered() {
            let runner = runner(section, AnswerPolicy::Strict);
            let before = runner.clone();
            match runner.go_to_next() {
                Advance::Blocked(after) => assert_eq!(after, before),
                other => panic!("expected blocked, got {other:?}"),
            }
        }
    }

    #[test]
    fn previous_is_a_no_op_at_the_first_question() {
        let mut runner = runner(Section::Psychometric, AnswerPolicy::Strict);
        runner.go_to_previous();
        assert_eq!(runner.current_index(), 0);

        runner.select_answer("4").expect("valid rating");
        let mut runner = expect_moved(runner.go_to_next());
        assert_eq!(runner.progress(), Progress { position: 2, total: 10 });
        runner.go_to_previous();
        assert_eq!(runner.current_index(), 0);
        assert_eq!(runner.current_answer(), Some("4"));
    }

    #[test]
    fn strict_policy_rejects_unknown_values() {
        let mut runner = runner(Section::Technical, AnswerPolicy::Strict);
        let err = runner.select_answer("e").expect_err("e is not an option");
        assert!(matches!(err, ValidationError::InvalidOption { .. }));
        assert!(runner.answers().is_empty());
    }

    #[test]
    fn lenient_policy_accepts_any_value() {
        let mut runner = runner(Section::Technical, AnswerPolicy::Lenient);
        runner.select_answer("e").expect("lenient accepts");
        assert_eq!(runner.current_answer(), Some("e"));
        assert!(runner.can_advance());
    }

    #[test]
    fn completing_the_last_question_emits_the_section_score() {
        let mut runner = runner(Section::Wiscar, AnswerPolicy::Strict);
        loop {
            runner.select_answer("3").expect("valid rating");
            match runner.go_to_next() {
                Advance::Moved(next) => runner = next,
                Advance::Completed(SectionScore::Wiscar(score)) => {
                    assert_eq!(score.overall_confidence, 60.0);
                    break;
                }
                other => panic!("unexpected advance {other:?}"),
            }
        }
    }

    #[test]
    fn select_answer_without_questions_is_rejected() {
        let mut runner = SectionRunner::new(Section::Technical, &[], AnswerPolicy::Strict);
        assert_eq!(
            runner.select_answer("a"),
            Err(ValidationError::NoActiveQuestion)
        );
        assert!(matches!(runner.go_to_next(), Advance::Completed(_)));
    }
}

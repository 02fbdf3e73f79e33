use super::bank::QuestionBank;
use super::domain::{AnswerPolicy, Question, QuestionView, Section, ValidationError, TOTAL_STEPS};
use super::import::AnswerSheet;
use super::results::{render, AssessmentResults};
use super::runner::{Advance, Progress, SectionRunner};
use super::scoring::CombinedScores;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    Hero,
    Introduction,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl AssessmentStage {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Hero,
            Self::Introduction,
            Self::Psychometric,
            Self::Technical,
            Self::Wiscar,
            Self::Results,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Introduction => "introduction",
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
            Self::Results => "results",
        }
    }

    pub const fn section(self) -> Option<Section> {
        match self {
            Self::Psychometric => Some(Section::Psychometric),
            Self::Technical => Some(Section::Technical),
            Self::Wiscar => Some(Section::Wiscar),
            _ => None,
        }
    }

    /// Step number for the "Step n of 4" header; hero and introduction have none.
    pub const fn step(self) -> Option<u8> {
        match self {
            Self::Results => Some(TOTAL_STEPS),
            _ => match self.section() {
                Some(section) => Some(section.step()),
                None => None,
            },
        }
    }

    /// Next stage on the linear path. Results restarts rather than advancing.
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Hero => Some(Self::Introduction),
            Self::Introduction => Some(Self::Psychometric),
            Self::Psychometric => Some(Self::Technical),
            Self::Technical => Some(Self::Wiscar),
            Self::Wiscar => Some(Self::Results),
            Self::Results => None,
        }
    }
}

impl fmt::Display for AssessmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User intent delivered by the display layer.
///
/// `Next` moves past the hero and introduction screens too; `Start` and `Begin` are
/// the screen-specific names for the same step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    Start,
    Begin,
    Select(String),
    Previous,
    Next,
    Restart,
}

impl Intent {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Begin => "begin",
            Self::Select(_) => "select",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Restart => "restart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot apply '{intent}' during the {stage} stage")]
    UnexpectedIntent {
        stage: AssessmentStage,
        intent: &'static str,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{section} question {question_id} has no answer")]
    Incomplete {
        section: Section,
        question_id: String,
    },
}

/// Stage header and question position while a section is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageProgress {
    pub step: u8,
    pub total_steps: u8,
    pub question: Progress,
}

/// One run of the assessment.
///
/// Every transition produces a new session value and leaves `self` untouched.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    policy: AnswerPolicy,
    stage: AssessmentStage,
    runner: Option<SectionRunner>,
    scores: CombinedScores,
}

impl AssessmentSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::with_policy(bank, AnswerPolicy::default())
    }

    pub fn with_policy(bank: Arc<QuestionBank>, policy: AnswerPolicy) -> Self {
        Self {
            bank,
            policy,
            stage: AssessmentStage::Hero,
            runner: None,
            scores: CombinedScores::default(),
        }
    }

    /// Drives a fresh session through every stage using `sheet`.
    pub fn replay(
        bank: Arc<QuestionBank>,
        sheet: &AnswerSheet,
        policy: AnswerPolicy,
    ) -> Result<Self, SessionError> {
        let mut session = Self::with_policy(bank, policy).start()?.begin()?;

        loop {
            let (question_id, section) = match session.current_question() {
                Some(question) => (question.id, question.section()),
                None => break,
            };
            let value = sheet
                .get(question_id)
                .ok_or_else(|| SessionError::Incomplete {
                    section,
                    question_id: question_id.to_owned(),
                })?;
            session = session.select(value)?.next()?;
        }

        Ok(session)
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    pub fn scores(&self) -> &CombinedScores {
        &self.scores
    }

    pub fn runner(&self) -> Option<&SectionRunner> {
        self.runner.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.runner.as_ref().and_then(SectionRunner::current_question)
    }

    pub fn current_view(&self) -> Option<QuestionView> {
        self.current_question().map(Question::view)
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.runner.as_ref().and_then(SectionRunner::current_answer)
    }

    pub fn progress(&self) -> Option<StageProgress> {
        let runner = self.runner.as_ref()?;
        Some(StageProgress {
            step: runner.section().step(),
            total_steps: TOTAL_STEPS,
            question: runner.progress(),
        })
    }

    /// Whether `next` would change anything right now.
    pub fn can_advance(&self) -> bool {
        match &self.runner {
            Some(runner) => runner.can_advance(),
            None => matches!(
                self.stage,
                AssessmentStage::Hero | AssessmentStage::Introduction
            ),
        }
    }

    pub fn results(&self) -> Option<AssessmentResults> {
        (self.stage == AssessmentStage::Results).then(|| render(&self.scores))
    }

    pub fn apply(&self, intent: Intent) -> Result<Self, SessionError> {
        let mut next = self.clone();

        match (self.stage, intent) {
            (AssessmentStage::Hero, Intent::Start | Intent::Next) => {
                next.stage = AssessmentStage::Introduction;
            }
            (AssessmentStage::Introduction, Intent::Begin | Intent::Next) => {
                next.enter(AssessmentStage::Psychometric);
            }
            (AssessmentStage::Results, Intent::Restart) => {
                next.stage = AssessmentStage::Hero;
                next.runner = None;
                next.scores = CombinedScores::default();
            }
            (stage, intent) => {
                let unexpected = SessionError::UnexpectedIntent {
                    stage,
                    intent: intent.name(),
                };
                let Some(runner) = next.runner.take() else {
                    return Err(unexpected);
                };
                match intent {
                    Intent::Select(value) => {
                        let mut runner = runner;
                        runner.select_answer(&value)?;
                        next.runner = Some(runner);
                    }
                    Intent::Previous => {
                        let mut runner = runner;
                        runner.go_to_previous();
                        next.runner = Some(runner);
                    }
                    Intent::Next => match runner.go_to_next() {
                        Advance::Moved(runner) | Advance::Blocked(runner) => {
                            next.runner = Some(runner);
                        }
                        Advance::Completed(score) => {
                            next.scores.merge(score);
                            if let Some(successor) = stage.successor() {
                                next.enter(successor);
                            }
                        }
                    },
                    _ => return Err(unexpected),
                }
            }
        }

        if next.stage != self.stage {
            debug!(from = %self.stage, to = %next.stage, "assessment stage changed");
        }

        Ok(next)
    }

    pub fn start(&self) -> Result<Self, SessionError> {
        self.apply(Intent::Start)
    }

    pub fn begin(&self) -> Result<Self, SessionError> {
        self.apply(Intent::Begin)
    }

    pub fn select(&self, value: &str) -> Result<Self, SessionError> {
        self.apply(Intent::Select(value.to_owned()))
    }

    pub fn previous(&self) -> Result<Self, SessionError> {
        self.apply(Intent::Previous)
    }

    pub fn next(&self) -> Result<Self, SessionError> {
        self.apply(Intent::Next)
    }

    pub fn restart(&self) -> Result<Self, SessionError> {
        self.apply(Intent::Restart)
    }

    fn enter(&mut self, stage: AssessmentStage) {
        self.stage = stage;
        self.runner = stage
            .section()
            .map(|section| SectionRunner::new(section, self.bank.questions(section), self.policy));
    }
}

//! Question bank, section runners, scorers, the stage machine that sequences them, and
//! the results renderer.

mod answers;
pub mod bank;
pub mod domain;
mod import;
pub mod results;
mod runner;
pub mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use bank::QuestionBank;
pub use domain::{
    AnswerOption, AnswerPolicy, OptionView, PsychometricCategory, Question, QuestionTag,
    QuestionView, Section, TechnicalKind, ValidationError, WiscarDimension, TOTAL_STEPS,
};
pub use import::{AnswerImportError, AnswerSheet};
pub use results::{render, AssessmentReport, AssessmentResults, Recommendation};
pub use runner::{Advance, Progress, SectionRunner};
pub use scoring::{CombinedScores, FinalScores, SectionScore};
pub use session::{AssessmentSession, AssessmentStage, Intent, SessionError, StageProgress};

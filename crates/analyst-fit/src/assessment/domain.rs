use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of progress steps shown in stage headers (three sections plus results).
pub const TOTAL_STEPS: u8 = 4;

/// Highest value on the agreement scale used by Likert questions.
pub const LIKERT_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar,
}

impl Section {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical",
            Self::Wiscar => "WISCAR",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Psychometric => "Personality & Motivation Assessment",
            Self::Technical => "Technical Skills & Aptitude",
            Self::Wiscar => "WISCAR Framework Analysis",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Psychometric => {
                "Help us understand your personality traits, interests, and motivation for market research"
            }
            Self::Technical => {
                "Testing your analytical reasoning, prerequisite knowledge, and domain expertise"
            }
            Self::Wiscar => {
                "Evaluating your Will, Interest, Skill, Cognitive abilities, Ability to learn, and Real-world alignment"
            }
        }
    }

    /// Position of the section in the "Step n of 4" header.
    pub const fn step(self) -> u8 {
        match self {
            Self::Psychometric => 1,
            Self::Technical => 2,
            Self::Wiscar => 3,
        }
    }

    /// Likert sections are scored by agreement, the technical section by correctness.
    pub const fn is_likert(self) -> bool {
        matches!(self, Self::Psychometric | Self::Wiscar)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "psychometric" => Ok(Self::Psychometric),
            "technical" => Ok(Self::Technical),
            "wiscar" => Ok(Self::Wiscar),
            _ => Err(ValidationError::UnknownSection(value.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsychometricCategory {
    Interest,
    Personality,
    Motivation,
    Cognitive,
}

impl PsychometricCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Interest,
            Self::Personality,
            Self::Motivation,
            Self::Cognitive,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Interest",
            Self::Personality => "Personality",
            Self::Motivation => "Motivation",
            Self::Cognitive => "Cognitive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalKind {
    Aptitude,
    Prerequisite,
    Domain,
}

impl TechnicalKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Aptitude, Self::Prerequisite, Self::Domain]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Aptitude => "Aptitude",
            Self::Prerequisite => "Prerequisite",
            Self::Domain => "Domain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorld,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::AbilityToLearn,
            Self::RealWorld,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Will => 'W',
            Self::Interest => 'I',
            Self::Skill => 'S',
            Self::Cognitive => 'C',
            Self::AbilityToLearn => 'A',
            Self::RealWorld => 'R',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::AbilityToLearn => "Ability to Learn",
            Self::RealWorld => "Real-World Alignment",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Will => "Inner drive & persistence",
            Self::Interest => "Genuine curiosity",
            Self::Skill => "Current abilities",
            Self::Cognitive => "Thinking style",
            Self::AbilityToLearn => "Learning capacity",
            Self::RealWorld => "Role understanding",
        }
    }
}

/// Section-specific classification that the scorers group answers by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum QuestionTag {
    Psychometric {
        category: PsychometricCategory,
        construct: &'static str,
    },
    Technical {
        kind: TechnicalKind,
    },
    Wiscar {
        dimension: WiscarDimension,
    },
}

impl QuestionTag {
    pub const fn section(self) -> Section {
        match self {
            Self::Psychometric { .. } => Section::Psychometric,
            Self::Technical { .. } => Section::Technical,
            Self::Wiscar { .. } => Section::Wiscar,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric { category, .. } => category.label(),
            Self::Technical { kind } => kind.label(),
            Self::Wiscar { dimension } => dimension.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub correct: bool,
}

impl AnswerOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            correct: false,
        }
    }

    pub const fn correct(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            correct: true,
        }
    }
}

/// The five-point agreement scale shared by the psychometric and WISCAR sections.
pub fn likert_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("1", "Strongly Disagree"),
        AnswerOption::new("2", "Disagree"),
        AnswerOption::new("3", "Neutral"),
        AnswerOption::new("4", "Agree"),
        AnswerOption::new("5", "Strongly Agree"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub tag: QuestionTag,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn section(&self) -> Section {
        self.tag.section()
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.correct)
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidOption {
                question_id: self.id.to_owned(),
                value: value.to_owned(),
            })
        }
    }

    /// Display payload for the question; correctness flags never leave the engine.
    pub fn view(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            text: self.text,
            section: self.section(),
            tag_label: self.tag.label(),
            options: self
                .options
                .iter()
                .map(|option| OptionView {
                    value: option.value,
                    label: option.label,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub text: &'static str,
    pub section: Section,
    pub tag_label: &'static str,
    pub options: Vec<OptionView>,
}

/// How answer values outside a question's option list are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPolicy {
    /// Reject anything that is not one of the question's option values.
    #[default]
    Strict,
    /// Accept any value; scorers ignore what they cannot interpret.
    Lenient,
}

impl AnswerPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" | "loose" => Some(Self::Lenient),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{value}' is not a valid option for question {question_id}")]
    InvalidOption { question_id: String, value: String },
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("no question is currently active")]
    NoActiveQuestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technical_question() -> Question {
        Question {
            id: "t-sample",
            text: "Pick the median of 1, 2, 3",
            tag: QuestionTag::Technical {
                kind: TechnicalKind::Aptitude,
            },
            options: vec![
                AnswerOption::new("a", "1"),
                AnswerOption::correct("b", "2"),
                AnswerOption::new("c", "3"),
            ],
        }
    }

    #[test]
    fn validate_rejects_values_outside_the_option_list() {
        let question = technical_question();
        assert!(question.validate("b").is_ok());

        let Err(ValidationError::InvalidOption { question_id, value }) = question.validate("z")
        else {
            panic!("expected InvalidOption error");
        };
        assert_eq!(question_id, "t-sample");
        assert_eq!(value, "z");
    }

    #[test]
    fn view_hides_correctness_flags() {
        let view = technical_question().view();
        let json = serde_json::to_value(&view).expect("view serializes");
        let options = json["options"].as_array().expect("options array");
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|option| option.get("correct").is_none()));
        assert_eq!(view.tag_label, "Aptitude");
    }

    #[test]
    fn section_parses_case_insensitively() {
        assert_eq!("WISCAR".parse::<Section>(), Ok(Section::Wiscar));
        assert_eq!(" technical ".parse::<Section>(), Ok(Section::Technical));
        assert!(matches!(
            "finance".parse::<Section>(),
            Err(ValidationError::UnknownSection(_))
        ));
    }

    #[test]
    fn answer_policy_parses_known_names() {
        assert_eq!(AnswerPolicy::parse("Strict"), Some(AnswerPolicy::Strict));
        assert_eq!(AnswerPolicy::parse("lenient"), Some(AnswerPolicy::Lenient));
        assert_eq!(AnswerPolicy::parse("whatever"), None);
    }
}

use super::bank::QuestionBank;
use super::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Answers for a whole assessment keyed by question id, used to replay a session
/// without interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: String,
    #[serde(default)]
    value: String,
}

impl AnswerSheet {
    /// Builds a sheet, rejecting ids the bank does not know. Blank values count as
    /// unanswered and are dropped.
    pub fn from_map(
        bank: &QuestionBank,
        mut answers: BTreeMap<String, String>,
    ) -> Result<Self, ValidationError> {
        answers.retain(|_, value| !value.trim().is_empty());
        let sheet = Self { answers };
        sheet.validate_ids(bank)?;
        Ok(sheet)
    }

    /// Parses `question_id,value` rows.
    pub fn from_csv_reader<R: Read>(
        bank: &QuestionBank,
        reader: R,
    ) -> Result<Self, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = BTreeMap::new();
        for row in csv_reader.deserialize::<AnswerRow>() {
            let row = row?;
            answers.insert(row.question_id, row.value);
        }

        Ok(Self::from_map(bank, answers)?)
    }

    pub fn from_json_str(bank: &QuestionBank, raw: &str) -> Result<Self, AnswerImportError> {
        let answers: BTreeMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self::from_map(bank, answers)?)
    }

    /// Reads a sheet from disk; `.json` files are parsed as JSON, anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(bank: &QuestionBank, path: P) -> Result<Self, AnswerImportError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut file = File::open(path)?;
        if is_json {
            let mut raw = String::new();
            file.read_to_string(&mut raw)?;
            Self::from_json_str(bank, &raw)
        } else {
            Self::from_csv_reader(bank, file)
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    fn validate_ids(&self, bank: &QuestionBank) -> Result<(), ValidationError> {
        match self.answers.keys().find(|id| bank.find(id).is_none()) {
            Some(unknown) => Err(ValidationError::UnknownQuestion(unknown.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer sheet JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

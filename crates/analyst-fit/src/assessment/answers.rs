use serde::Serialize;
use std::collections::BTreeMap;

/// Selected option value per question id for a single section.
///
/// Re-answering a question replaces the previous value; no history is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `question_id`, returning the value it replaced.
    pub fn record(&mut self, question_id: &str, value: impl Into<String>) -> Option<String> {
        self.values.insert(question_id.to_owned(), value.into())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.values.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(id, value)| (id.into(), value.into()))
                .collect(),
        }
    }
}

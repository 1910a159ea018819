//! The mutable answer store backing one assessment session.

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::QuestionId;

use super::value::AnswerValue;

/// Mapping from question id to the recorded answer.
///
/// Preserves insertion order, supports partial completion, and grows or
/// overwrites one entry per mutation; entries are never removed once set.
/// The store itself does not validate values; the session's
/// [`set_answer`](crate::session::AssessmentSession::set_answer) is the
/// validating mutation path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: IndexMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any previous entry for the question.
    pub fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    /// Look up the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// Whether the question has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no question has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over recorded answers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }
}

impl<'a> IntoIterator for &'a AnswerStore {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = indexmap::map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerStore {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

//! Typed answer values.
//!
//! An [`AnswerValue`] mirrors the [`QuestionKind`](crate::catalog::QuestionKind)
//! of the question it answers. Values are checked and clamped once, at the
//! mutation boundary ([`AnswerValue::coerce_for`]); everything stored after
//! that point is already in its kind's valid domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Question, QuestionKind};
use crate::error::AnswerError;

/// A single typed answer.
///
/// Serializes untagged, so an answer map renders as plain JSON scalars
/// (`true`, `4`, `"Yes"`, `2.5`) rather than wrapped objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Answer to a boolean question
    Boolean(bool),
    /// Answer to a scale question, in `[1, max]` once coerced
    Scale(u32),
    /// Answer to a select question, one of the question's options once coerced
    Select(String),
    /// Answer to a number question, in `[0, 100]` once coerced
    Number(f64),
}

/// Lowest value a scale answer clamps to.
pub const SCALE_MIN: u32 = 1;
/// Largest value a number answer clamps to.
pub const NUMBER_MAX: f64 = 100.0;

impl AnswerValue {
    /// Short label for this value's variant, used in mismatch errors.
    pub fn kind_label(&self) -> &'static str {
        match self {
            AnswerValue::Boolean(_) => "boolean",
            AnswerValue::Scale(_) => "scale",
            AnswerValue::Select(_) => "select",
            AnswerValue::Number(_) => "number",
        }
    }

    /// Check this value against a question and clamp it into the question's
    /// valid domain.
    ///
    /// Wrong-variant values and out-of-vocabulary select answers are
    /// rejected; out-of-range values of the right variant are clamped to the
    /// nearest bound (scale into `[1, max]`, number into `[0, 100]`,
    /// non-finite numbers to 0). Clamping is idempotent: coercing an already
    /// coerced value returns it unchanged.
    pub fn coerce_for(self, question: &Question) -> Result<AnswerValue, AnswerError> {
        match (&question.kind, self) {
            (QuestionKind::Boolean, AnswerValue::Boolean(b)) => Ok(AnswerValue::Boolean(b)),
            (QuestionKind::Scale { max }, AnswerValue::Scale(v)) => {
                Ok(AnswerValue::Scale(v.clamp(SCALE_MIN, *max)))
            }
            (QuestionKind::Select { options }, AnswerValue::Select(s)) => {
                if options.iter().any(|o| o == &s) {
                    Ok(AnswerValue::Select(s))
                } else {
                    Err(AnswerError::InvalidOption {
                        question: question.id.clone(),
                        value: s,
                    })
                }
            }
            (QuestionKind::Number { .. }, AnswerValue::Number(v)) => {
                Ok(AnswerValue::Number(clamp_number(v)))
            }
            (kind, value) => Err(AnswerError::KindMismatch {
                question: question.id.clone(),
                expected: kind.label(),
                got: value.kind_label(),
            }),
        }
    }
}

/// Clamp a number answer into `[0, 100]`, mapping non-finite input to 0.
pub(crate) fn clamp_number(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, NUMBER_MAX)
    } else {
        0.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Boolean(true) => write!(f, "Yes"),
            AnswerValue::Boolean(false) => write!(f, "No"),
            AnswerValue::Scale(v) => write!(f, "{v}"),
            AnswerValue::Select(s) => write!(f, "{s}"),
            AnswerValue::Number(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Boolean(b)
    }
}

impl From<u32> for AnswerValue {
    fn from(v: u32) -> Self {
        AnswerValue::Scale(v)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Select(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(v: f64) -> Self {
        AnswerValue::Number(v)
    }
}

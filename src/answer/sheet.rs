//! Answer sheet files.
//!
//! An answer sheet is the on-disk input format: a single JSON object mapping
//! question ids to scalar values, e.g.
//!
//! ```json
//! {
//!   "hipaa_compliance": true,
//!   "access_controls": 4,
//!   "fda_approval": "Yes",
//!   "error_rate": 2.5
//! }
//! ```
//!
//! Parsing only checks the file's shape; matching values against their
//! questions happens when a session applies the sheet.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::catalog::{Question, QuestionId, QuestionKind};
use crate::error::{AnswerError, ErrorContext, GovScoreError, Result, SheetErrorKind};

use super::value::AnswerValue;

/// A raw scalar from an answer sheet, not yet matched to a question.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAnswer {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawAnswer {
    /// Short label for this scalar's shape, used in mismatch errors.
    pub fn kind_label(&self) -> &'static str {
        match self {
            RawAnswer::Bool(_) => "boolean",
            RawAnswer::Int(_) => "integer",
            RawAnswer::Float(_) => "number",
            RawAnswer::Text(_) => "string",
        }
    }

    /// Lift this raw scalar into the answer variant the question expects.
    ///
    /// Only the variant is resolved here; range clamping happens in
    /// [`AnswerValue::coerce_for`]. Integral floats are accepted for scale
    /// questions since JSON does not distinguish `4` from `4.0`.
    pub fn into_value_for(self, question: &Question) -> std::result::Result<AnswerValue, AnswerError> {
        match (&question.kind, self) {
            (QuestionKind::Boolean, RawAnswer::Bool(b)) => Ok(AnswerValue::Boolean(b)),
            (QuestionKind::Scale { .. }, RawAnswer::Int(i)) => {
                Ok(AnswerValue::Scale(clamp_to_u32(i)))
            }
            (QuestionKind::Scale { .. }, RawAnswer::Float(f)) if f.fract() == 0.0 => {
                Ok(AnswerValue::Scale(clamp_to_u32(f as i64)))
            }
            (QuestionKind::Select { .. }, RawAnswer::Text(s)) => Ok(AnswerValue::Select(s)),
            (QuestionKind::Number { .. }, RawAnswer::Int(i)) => Ok(AnswerValue::Number(i as f64)),
            (QuestionKind::Number { .. }, RawAnswer::Float(f)) => Ok(AnswerValue::Number(f)),
            (kind, raw) => Err(AnswerError::KindMismatch {
                question: question.id.clone(),
                expected: kind.label(),
                got: raw.kind_label(),
            }),
        }
    }
}

fn clamp_to_u32(i: i64) -> u32 {
    i.clamp(0, i64::from(u32::MAX)) as u32
}

/// A parsed answer sheet: question ids mapped to raw scalars, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    entries: IndexMap<QuestionId, RawAnswer>,
}

impl AnswerSheet {
    /// Parse an answer sheet from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let object = value.as_object().ok_or_else(|| {
            GovScoreError::sheet("top-level value", SheetErrorKind::NotAnObject)
        })?;

        let mut entries = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            let raw = raw_from_json(value).ok_or_else(|| {
                GovScoreError::sheet(
                    "answer values must be scalars",
                    SheetErrorKind::UnsupportedValue {
                        question: key.clone(),
                        found: json_type_name(value).to_string(),
                    },
                )
            })?;
            entries.insert(QuestionId::new(key.as_str()), raw);
        }

        Ok(Self { entries })
    }

    /// Load an answer sheet from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GovScoreError::io(path.to_path_buf(), e))?;
        Self::from_json_str(&content).with_context(|| format!("loading {}", path.display()))
    }

    /// Number of entries in the sheet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &RawAnswer)> {
        self.entries.iter()
    }
}

fn raw_from_json(value: &Value) -> Option<RawAnswer> {
    match value {
        Value::Bool(b) => Some(RawAnswer::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(RawAnswer::Int(i))
            } else {
                n.as_f64().map(RawAnswer::Float)
            }
        }
        Value::String(s) => Some(RawAnswer::Text(s.clone())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

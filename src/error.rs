//! Unified error types for govscore.
//!
//! The scoring pipeline itself is total and never fails; errors arise only at
//! the edges of the system, when building or loading a catalog, recording an
//! answer, parsing an answer sheet, or rendering a report.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::{CatalogIssue, QuestionId};

/// Main error type for govscore operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GovScoreError {
    /// Errors while building or loading a catalog
    #[error("Invalid catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while recording an answer
    #[error("Answer rejected: {context}")]
    Answer {
        context: String,
        #[source]
        source: AnswerError,
    },

    /// Errors while parsing an answer sheet
    #[error("Failed to parse answer sheet: {context}")]
    Sheet {
        context: String,
        #[source]
        source: SheetErrorKind,
    },

    /// Errors during report rendering
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    /// The catalog definition violates one or more construction invariants.
    /// Every problem found is reported, not just the first.
    #[error("catalog definition has {} problem(s): {}", .issues.len(), format_issues(.issues))]
    Invalid { issues: Vec<CatalogIssue> },

    #[error("invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("unsupported catalog file extension '{extension}' (expected json, yaml, or yml)")]
    UnsupportedExtension { extension: String },
}

/// Rejection raised at the answer-recording boundary.
///
/// Out-of-range values of the correct shape are clamped rather than rejected;
/// these variants cover the cases that have no sensible clamp target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("no question with id '{0}' in the catalog")]
    UnknownQuestion(QuestionId),

    #[error("question '{question}' expects a {expected} answer, got {got}")]
    KindMismatch {
        question: QuestionId,
        expected: &'static str,
        got: &'static str,
    },

    #[error("'{value}' is not an option for question '{question}'")]
    InvalidOption { question: QuestionId, value: String },
}

/// Specific answer-sheet parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SheetErrorKind {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("answer sheet must be a JSON object mapping question ids to values")]
    NotAnObject,

    #[error("unsupported value for question '{question}': {found}")]
    UnsupportedValue { question: String, found: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

fn format_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(CatalogIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for govscore operations
pub type Result<T> = std::result::Result<T, GovScoreError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GovScoreError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a catalog error bundling every validation issue found
    pub fn invalid_catalog(context: impl Into<String>, issues: Vec<CatalogIssue>) -> Self {
        Self::catalog(context, CatalogErrorKind::Invalid { issues })
    }

    /// Create an answer error with context
    pub fn answer(context: impl Into<String>, source: AnswerError) -> Self {
        Self::Answer {
            context: context.into(),
            source,
        }
    }

    /// Create a sheet error with context
    pub fn sheet(context: impl Into<String>, source: SheetErrorKind) -> Self {
        Self::Sheet {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for GovScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GovScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::sheet(
            "JSON deserialization",
            SheetErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// # Example
///
/// ```ignore
/// use govscore::error::ErrorContext;
///
/// fn load_catalog(path: &Path) -> Result<Catalog> {
///     let content = std::fs::read_to_string(path)
///         .context("reading catalog file")?;
///
///     parse_catalog_str(&content)
///         .with_context(|| format!("parsing catalog from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error,
    /// which is more efficient when the context string is expensive to compute.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GovScoreError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: GovScoreError, new_ctx: &str) -> GovScoreError {
    match err {
        GovScoreError::Catalog {
            context: existing,
            source,
        } => GovScoreError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GovScoreError::Answer {
            context: existing,
            source,
        } => GovScoreError::Answer {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GovScoreError::Sheet {
            context: existing,
            source,
        } => GovScoreError::Sheet {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GovScoreError::Report {
            context: existing,
            source,
        } => GovScoreError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GovScoreError::Io {
            path,
            message,
            source,
        } => GovScoreError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        GovScoreError::Validation(msg) => GovScoreError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| GovScoreError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| GovScoreError::Validation(f().into()))
    }
}

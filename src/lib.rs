//! **Weighted governance risk scoring for AI deployments.**
//!
//! `govscore` assesses the governance posture of a deployed AI system by
//! scoring an answer sheet against a weighted question catalog. It ships a
//! built-in healthcare LLM governance framework and accepts custom catalogs,
//! producing an overall risk score, per-category breakdowns, critical issue
//! counts, and prioritized recommendations. It powers both a command-line
//! interface (CLI) for CI gating and a Rust library for programmatic
//! integration into your own applications.
//!
//! ## Key Features
//!
//! - **Weighted Scoring**: Each category carries a relative weight; every
//!   question contributes up to 100 points scaled by its category's weight.
//!   Unanswered questions count against the score by default.
//! - **Typed Questions**: Boolean, 1-to-N scale, ranked select, and numeric
//!   measurement questions, each with its own scoring rule. Out-of-range
//!   values are clamped at the mutation boundary, never rejected.
//! - **Critical Issue Tracking**: Boolean questions marked critical count as
//!   critical compliance issues when answered "no", independent of the score.
//! - **Risk Classification**: Scores map to LOW / MEDIUM / HIGH risk bands,
//!   with recommendations generated from the score and critical issue count.
//! - **Flexible Reporting**: Text, JSON, and Markdown report renderers, plus
//!   date-stamped JSON report files for audit trails.
//!
//! ## Core Concepts & Modules
//!
//! The library is organized into several key modules:
//!
//! - **[`catalog`]**: Defines the [`Catalog`], the immutable questionnaire an
//!   assessment runs against: weighted categories holding typed questions.
//!   Load one from JSON/YAML, build one programmatically, or use
//!   [`Catalog::builtin()`].
//! - **[`answer`]**: Answer values, the per-session answer store, and answer
//!   sheet files. Values are checked and clamped against their question's
//!   kind when they enter a session.
//! - **[`scoring`]**: The [`ScoringEngine`] and the pure recommendation
//!   generator. Scoring is total, deterministic, and O(questions).
//! - **[`session`]**: The [`AssessmentSession`] state machine tying a catalog
//!   to an answer store; every mutation synchronously recomputes the score.
//! - **[`report`]**: The [`Report`] snapshot and its renderers.
//!
//! ## Getting Started: Scoring an Assessment
//!
//! ```no_run
//! use std::sync::Arc;
//! use govscore::{AssessmentSession, Catalog};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = AssessmentSession::new(Arc::new(Catalog::builtin()));
//!
//!     session.set_answer("hipaa_compliance", true)?;
//!     session.set_answer("access_controls", 4u32)?;
//!     session.set_answer("fda_approval", "Yes")?;
//!     session.set_answer("error_rate", 2.5)?;
//!
//!     let result = session.score_result();
//!     println!(
//!         "Score: {} ({}), {} critical issues",
//!         result.display_score(),
//!         session.risk_level().label(),
//!         result.critical_issues
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Examples
//!
//! ### Scoring an Answer Sheet File
//!
//! Answer sheets are JSON objects mapping question ids to scalar answers.
//! Entries that do not fit their question are reported and skipped; the rest
//! are applied and scored.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use govscore::{AnswerSheet, AssessmentSession, Catalog};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sheet = AnswerSheet::from_path(Path::new("answers.json"))?;
//!
//!     let mut session = AssessmentSession::new(Arc::new(Catalog::builtin()));
//!     let outcome = session.apply_sheet(&sheet);
//!     for rejection in &outcome.rejections {
//!         eprintln!("skipped {}: {}", rejection.question, rejection.error);
//!     }
//!
//!     for recommendation in session.recommendations() {
//!         println!("[{}] {}", recommendation.priority, recommendation.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Building a Custom Catalog
//!
//! ```no_run
//! use govscore::catalog::{Catalog, Category, Question, QuestionKind};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::builder("internal-ml-governance")
//!         .category(Category::new(
//!             "data_handling",
//!             "Data Handling",
//!             1.0,
//!             vec![
//!                 Question::new("encrypted", "Is data encrypted?", QuestionKind::Boolean)
//!                     .critical(),
//!                 Question::new(
//!                     "retention",
//!                     "Retention policy maturity",
//!                     QuestionKind::Scale { max: 5 },
//!                 ),
//!             ],
//!         ))
//!         .build()?;
//!
//!     assert_eq!(catalog.question_count(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ### Exporting a Report
//!
//! [`AssessmentSession::export_report`] snapshots the session into a
//! [`Report`] that serializes to JSON and renders to text or Markdown.
//!
//! ```no_run
//! use std::sync::Arc;
//! use govscore::{AssessmentSession, Catalog};
//! use govscore::report::{JsonRenderer, ReportRenderer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = AssessmentSession::new(Arc::new(Catalog::builtin()));
//!     session.set_answer("hipaa_compliance", true)?;
//!
//!     let report = session.export_report();
//!     let json = JsonRenderer::new().pretty(true).render(&report)?;
//!     std::fs::write(report.suggested_filename(), json)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `govscore` library crate. If you are looking
//! for the command-line tool, please refer to the project's README or install
//! it via `cargo install govscore`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64/u32 casts are pervasive in score math, where
    // question counts and scores are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report render functions are inherently long; splitting hurts readability
    clippy::too_many_lines,
    // Config structs legitimately use many bools for CLI flags
    clippy::struct_excessive_bools,
    // Variable names like `earned`/`percent` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod answer;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod report;
pub mod scoring;
pub mod session;

// Re-export main types for convenience
pub use answer::{AnswerSheet, AnswerStore, AnswerValue, RawAnswer};
pub use catalog::{
    Catalog, CatalogBuilder, Category, CategoryId, Question, QuestionId, QuestionKind,
};
pub use error::{AnswerError, ErrorContext, GovScoreError, OptionContext, Result};
pub use report::{Report, ReportFormat, ReportRenderer};
pub use scoring::{
    generate_recommendations, CategoryScore, Priority, Recommendation, RecommendationKind,
    RiskLevel, ScoreResult, ScoringEngine, ScoringPolicy, UnansweredPolicy,
};
pub use session::{AssessmentSession, SheetOutcome, SheetRejection};

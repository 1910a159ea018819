//! Report generation for assessment results.
//!
//! A [`Report`] is an immutable snapshot of one assessment: score, risk
//! level, answers, and recommendations, stamped with a UTC timestamp.
//! Renderers turn a report into one of three output formats:
//! - JSON: structured export for programmatic integration
//! - Markdown: human-readable documentation
//! - Text: compact colored terminal summary
//!
//! Reports deep-copy everything they contain, so a session can keep
//! mutating after `export_report()` without altering reports already
//! produced.

mod json;
mod markdown;
mod text;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerValue;
use crate::catalog::{CategoryId, QuestionId};
use crate::error::Result;
use crate::scoring::{CategoryScore, Recommendation, RiskLevel, SCORING_ENGINE_VERSION};
use crate::session::AssessmentSession;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Colored terminal summary
    #[default]
    Text,
    /// Structured JSON export
    Json,
    /// Human-readable Markdown
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Tool identification embedded in exported reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: "govscore".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One answered question as captured in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Category the question belongs to
    pub category: CategoryId,
    /// Category name at export time
    pub category_name: String,
    /// Question id
    pub question: QuestionId,
    /// Question text at export time
    pub text: String,
    /// The recorded answer
    pub value: AnswerValue,
    /// Whether the question is flagged critical
    pub critical: bool,
}

/// Immutable snapshot of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct Report {
    /// Tool name and version
    pub tool: ToolInfo,
    /// Scoring engine version
    pub engine_version: String,
    /// When the snapshot was taken
    pub generated_at: DateTime<Utc>,
    /// Name of the catalog assessed against
    pub catalog_name: String,
    /// Unrounded final score in 0..=100
    pub final_score: f64,
    /// Rounded score as shown to users
    pub display_score: u32,
    /// Risk classification of the displayed score
    pub risk_level: RiskLevel,
    /// Critical boolean questions answered false
    pub critical_issues: usize,
    /// Questions with a recorded answer
    pub answered: usize,
    /// Questions in the catalog
    pub total_questions: usize,
    /// Per-category score contributions in catalog order
    pub categories: Vec<CategoryScore>,
    /// Answered questions in catalog order
    pub answers: Vec<AnswerRecord>,
    /// Recommendations in priority order
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    /// Snapshot a session.
    ///
    /// Answers are copied out in catalog order rather than insertion order,
    /// so two sessions with the same answers produce byte-identical report
    /// bodies regardless of the order the answers were recorded in.
    pub(crate) fn from_session(session: &AssessmentSession) -> Self {
        let result = session.score_result();
        let store = session.answers();

        let answers = session
            .catalog()
            .iter_questions()
            .filter_map(|(category, question)| {
                store.get(&question.id).map(|value| AnswerRecord {
                    category: category.id.clone(),
                    category_name: category.name.clone(),
                    question: question.id.clone(),
                    text: question.text.clone(),
                    value: value.clone(),
                    critical: question.critical,
                })
            })
            .collect();

        Self {
            tool: ToolInfo::current(),
            engine_version: SCORING_ENGINE_VERSION.to_string(),
            generated_at: Utc::now(),
            catalog_name: session.catalog().name.clone(),
            final_score: result.final_score,
            display_score: result.display_score(),
            risk_level: result.risk_level(),
            critical_issues: result.critical_issues,
            answered: result.answered,
            total_questions: result.total_questions,
            categories: session.category_breakdown(),
            answers,
            recommendations: session.recommendations().to_vec(),
        }
    }

    /// Default filename for this report: `<catalog>-report-<YYYY-MM-DD>.json`.
    #[must_use]
    pub fn suggested_filename(&self) -> String {
        format!(
            "{}-report-{}.json",
            self.catalog_name,
            self.generated_at.format("%Y-%m-%d")
        )
    }
}

/// Renders a report into one output format.
pub trait ReportRenderer {
    /// Produce the rendered report.
    fn render(&self, report: &Report) -> Result<String>;

    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;
}

/// Create a renderer for the given format.
#[must_use]
pub fn create_renderer(format: ReportFormat, use_color: bool) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Text => {
            if use_color {
                Box::new(TextRenderer::new())
            } else {
                Box::new(TextRenderer::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonRenderer::new()),
        ReportFormat::Markdown => Box::new(MarkdownRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    fn reported_session() -> AssessmentSession {
        let mut session = AssessmentSession::new(Arc::new(Catalog::builtin()));
        session.set_answer("hipaa_compliance", true).unwrap();
        session.set_answer("clinical_validation", false).unwrap();
        session.set_answer("access_controls", 4_u32).unwrap();
        session.set_answer("fda_approval", "Pending").unwrap();
        session.set_answer("error_rate", 2.0).unwrap();
        session
    }

    #[test]
    fn test_report_snapshots_session_state() {
        let session = reported_session();
        let report = session.export_report();

        assert_eq!(report.catalog_name, "healthcare-llm-governance");
        assert_eq!(report.engine_version, SCORING_ENGINE_VERSION);
        assert_eq!(report.answered, 5);
        assert_eq!(report.total_questions, 20);
        assert_eq!(report.critical_issues, 1);
        assert_eq!(report.final_score, session.score_result().final_score);
        assert_eq!(report.display_score, session.score_result().display_score());
        assert_eq!(report.answers.len(), 5);
        assert_eq!(report.recommendations.len(), session.recommendations().len());
        assert_eq!(report.categories.len(), 5);
        assert_eq!(report.categories[0].id.as_str(), "data_privacy");
        assert_eq!(report.categories[0].answered, 2);
    }

    #[test]
    fn test_report_orders_answers_by_catalog_not_insertion() {
        let session = reported_session();
        let report = session.export_report();

        // hipaa_compliance, access_controls come before the clinical
        // safety questions no matter the insertion order above.
        let ids: Vec<&str> = report.answers.iter().map(|a| a.question.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "hipaa_compliance",
                "access_controls",
                "fda_approval",
                "clinical_validation",
                "error_rate",
            ]
        );
    }

    #[test]
    fn test_report_is_immutable_after_export() {
        let mut session = reported_session();
        let report = session.export_report();
        let score_before = report.final_score;
        let answers_before = report.answers.clone();

        session.set_answer("clinical_validation", true).unwrap();
        session.set_answer("audit_logging", true).unwrap();

        assert_eq!(report.final_score, score_before);
        assert_eq!(report.answers, answers_before);
        assert_ne!(session.score_result().final_score, score_before);
    }

    #[test]
    fn test_suggested_filename_is_date_stamped() {
        let session = reported_session();
        let report = session.export_report();

        let expected = format!(
            "healthcare-llm-governance-report-{}.json",
            Utc::now().format("%Y-%m-%d")
        );
        assert_eq!(report.suggested_filename(), expected);
    }

    #[test]
    fn test_create_renderer_formats() {
        assert_eq!(
            create_renderer(ReportFormat::Text, true).format(),
            ReportFormat::Text
        );
        assert_eq!(
            create_renderer(ReportFormat::Json, false).format(),
            ReportFormat::Json
        );
        assert_eq!(
            create_renderer(ReportFormat::Markdown, false).format(),
            ReportFormat::Markdown
        );
    }
}

//! Assess command handler.
//!
//! Implements the `assess` subcommand: score an answer sheet against a
//! catalog, render the result, and gate CI on score thresholds.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::{build_session, exit_codes, should_use_color, write_output, OutputTarget};
use crate::report::{JsonRenderer, MarkdownRenderer, ReportFormat, ReportRenderer, TextRenderer};
use crate::scoring::ScoringPolicy;

/// Assess command configuration
pub struct AssessConfig {
    pub answers_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<f64>,
    pub fail_on_critical: bool,
    pub show_metrics: bool,
    pub no_recommendations: bool,
    pub exclude_unanswered: bool,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig) -> Result<i32> {
    let policy = if config.exclude_unanswered {
        ScoringPolicy::exclude_unanswered()
    } else {
        ScoringPolicy::default()
    };

    let session = build_session(&config.answers_path, config.catalog_path.as_deref(), policy)?;
    let result = session.score_result().clone();

    tracing::info!(
        "Scored {} of {} questions: {} ({})",
        result.answered,
        result.total_questions,
        result.display_score(),
        result.risk_level().label()
    );

    let mut report = session.export_report();
    if config.no_recommendations {
        report.recommendations.clear();
    }

    let use_color = should_use_color(config.no_color);
    let rendered = match config.output {
        ReportFormat::Text => {
            let mut renderer = TextRenderer::new();
            if !use_color {
                renderer = renderer.no_color();
            }
            if config.show_metrics {
                renderer = renderer.with_categories();
            }
            renderer.render(&report)?
        }
        ReportFormat::Json => JsonRenderer::new().render(&report)?,
        ReportFormat::Markdown => MarkdownRenderer::new().render(&report)?,
    };

    let target = OutputTarget::from_option(config.output_file);
    write_output(&rendered, &target, config.quiet)?;

    // Threshold gates: a critical failure outranks a low score.
    if config.fail_on_critical && result.critical_issues > 0 {
        tracing::error!(
            "{} critical compliance {} present",
            result.critical_issues,
            if result.critical_issues == 1 {
                "issue"
            } else {
                "issues"
            }
        );
        return Ok(exit_codes::CRITICAL_ISSUES);
    }
    if let Some(threshold) = config.min_score {
        if result.final_score < threshold {
            tracing::error!(
                "Score {:.1} is below minimum threshold {:.1}",
                result.final_score,
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}

//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for one subcommand
//! and returns the process exit code.

mod assess;
mod catalog;
mod report;

pub use assess::{run_assess, AssessConfig};
pub use catalog::{run_catalog, CatalogConfig, CatalogOutput};
pub use report::{run_report, ReportFileConfig};

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::answer::AnswerSheet;
use crate::catalog::Catalog;
use crate::scoring::ScoringPolicy;
use crate::session::AssessmentSession;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Score below the `--min-score` threshold
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// Critical issues present with `--fail-on-critical`
    pub const CRITICAL_ISSUES: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

// ============================================================================
// Output handling
// ============================================================================

/// Target for output, either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    use anyhow::Context;
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

// ============================================================================
// Shared stages
// ============================================================================

/// Load the catalog to assess against: a file when given, else the builtin.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            tracing::debug!("Loading catalog from {}", path.display());
            Ok(Catalog::from_path(path)?)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Parse an answer sheet and apply it to a fresh session.
///
/// Rejected entries are logged and skipped; the session keeps every entry
/// that validated.
pub(crate) fn build_session(
    answers_path: &Path,
    catalog_path: Option<&Path>,
    policy: ScoringPolicy,
) -> Result<AssessmentSession> {
    let catalog = load_catalog(catalog_path)?;
    let sheet = AnswerSheet::from_path(answers_path)?;
    tracing::debug!(
        "Parsed {} answer entries from {}",
        sheet.len(),
        answers_path.display()
    );

    let mut session = AssessmentSession::with_policy(Arc::new(catalog), policy);
    let outcome = session.apply_sheet(&sheet);
    for rejection in &outcome.rejections {
        tracing::warn!(
            "Skipping answer for '{}': {}",
            rejection.question,
            rejection.error
        );
    }
    if outcome.applied > 0 {
        tracing::info!(
            "Recorded {} of {} answers",
            outcome.applied,
            outcome.applied + outcome.rejections.len()
        );
    }

    Ok(session)
}

//! Risk scoring for governance assessments.
//!
//! The scoring engine combines a catalog and an answer store into a single
//! normalized risk score with a critical-issue count; the recommendation
//! generator derives prioritized follow-ups from that result. Everything in
//! this module is pure: no I/O, no randomness, no state between calls.

mod engine;
mod recommend;

pub use engine::{CategoryScore, ScoreResult, ScoringEngine};
pub use recommend::{generate_recommendations, Priority, Recommendation, RecommendationKind};

use serde::{Deserialize, Serialize};

/// Scoring engine version, stamped into exported reports.
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Scores at or above this are medium risk rather than high risk.
///
/// Shared with the recommendation rules: the sub-60 "needs significant
/// improvement" recommendation fires exactly when a score classifies as
/// high risk.
pub const MEDIUM_RISK_FLOOR: f64 = 60.0;

/// Scores at or above this are low risk.
///
/// Shared with the recommendation rules: the sub-80 "additional safeguards"
/// recommendation fires exactly when a score classifies below low risk.
pub const LOW_RISK_FLOOR: f64 = 80.0;

// ============================================================================
// Risk classification
// ============================================================================

/// Display-tier risk classification of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score >= 80
    Low,
    /// Score in 60..80
    Medium,
    /// Score < 60
    High,
}

impl RiskLevel {
    /// Classify a score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= LOW_RISK_FLOOR {
            Self::Low
        } else if score >= MEDIUM_RISK_FLOOR {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Banner label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Medium => "MEDIUM RISK",
            Self::High => "HIGH RISK",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Scoring policy
// ============================================================================

/// How the engine treats questions with no recorded answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnansweredPolicy {
    /// Unanswered questions contribute nothing to the numerator but still
    /// inflate the denominator, so they score as failing. This is the
    /// documented behavior and the default; it must never change silently.
    #[default]
    ScoreAsZero,
    /// Unanswered questions are left out of both numerator and denominator,
    /// so the score reflects only what was answered.
    ExcludeFromDenominator,
}

/// Tunable scoring behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Treatment of unanswered questions
    pub unanswered: UnansweredPolicy,
}

impl ScoringPolicy {
    /// Policy that scores only answered questions.
    #[must_use]
    pub const fn exclude_unanswered() -> Self {
        Self {
            unanswered: UnansweredPolicy::ExcludeFromDenominator,
        }
    }
}

//! Recommendation generation.
//!
//! Three independent rules run in a fixed order: critical issues first,
//! then the high-risk score band, then the medium-risk band. A low score
//! can therefore produce both band recommendations at once. The rules
//! consume the unrounded score, so a result that rounds up to a threshold
//! can still trigger the band below it.

use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreResult, LOW_RISK_FLOOR, MEDIUM_RISK_FLOOR};

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity channel a recommendation is reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Error,
    Warning,
    Info,
}

impl RecommendationKind {
    /// Lowercase label, matching the serialized form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A prioritized follow-up action derived from a score result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// How urgently this should be acted on
    pub priority: Priority,
    /// Severity channel for display and filtering
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Action text
    pub text: String,
}

/// Derive recommendations from a score result.
///
/// The returned order is stable: critical, then high, then medium.
#[must_use]
pub fn generate_recommendations(result: &ScoreResult) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if result.critical_issues > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Critical,
            kind: RecommendationKind::Error,
            text: format!(
                "Address {} critical compliance issues immediately",
                result.critical_issues
            ),
        });
    }

    if result.final_score < MEDIUM_RISK_FLOOR {
        recommendations.push(Recommendation {
            priority: Priority::High,
            kind: RecommendationKind::Warning,
            text: "Overall governance framework needs significant improvement".to_string(),
        });
    }

    if result.final_score < LOW_RISK_FLOOR {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            kind: RecommendationKind::Info,
            text: "Consider implementing additional safeguards and monitoring".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(final_score: f64, critical_issues: usize) -> ScoreResult {
        ScoreResult {
            final_score,
            critical_issues,
            answered: 20,
            total_questions: 20,
        }
    }

    #[test]
    fn test_high_score_without_criticals_yields_nothing() {
        assert!(generate_recommendations(&result(85.0, 0)).is_empty());
        assert!(generate_recommendations(&result(100.0, 0)).is_empty());
    }

    #[test]
    fn test_low_score_fires_both_band_rules() {
        let recs = generate_recommendations(&result(59.0, 0));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].kind, RecommendationKind::Warning);
        assert_eq!(
            recs[0].text,
            "Overall governance framework needs significant improvement"
        );
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[1].kind, RecommendationKind::Info);
        assert_eq!(
            recs[1].text,
            "Consider implementing additional safeguards and monitoring"
        );
    }

    #[test]
    fn test_criticals_with_medium_score() {
        let recs = generate_recommendations(&result(75.0, 2));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].priority, Priority::Critical);
        assert_eq!(recs[0].kind, RecommendationKind::Error);
        assert_eq!(
            recs[0].text,
            "Address 2 critical compliance issues immediately"
        );
        assert_eq!(recs[1].priority, Priority::Medium);
    }

    #[test]
    fn test_criticals_alone_on_high_score() {
        let recs = generate_recommendations(&result(92.0, 1));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Critical);
        assert_eq!(
            recs[0].text,
            "Address 1 critical compliance issues immediately"
        );
    }

    #[test]
    fn test_band_boundaries_are_exclusive() {
        // Exactly at a floor is inside the better band.
        let recs = generate_recommendations(&result(60.0, 0));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Medium);

        assert!(generate_recommendations(&result(80.0, 0)).is_empty());
    }

    #[test]
    fn test_rules_consume_unrounded_score() {
        // 79.6 displays as 80 but the band rule sees the raw value.
        let recs = generate_recommendations(&result(79.6, 0));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Medium);
    }

    #[test]
    fn test_serialized_shape() {
        let recs = generate_recommendations(&result(50.0, 3));
        let json = serde_json::to_value(&recs).unwrap();

        assert_eq!(json[0]["priority"], "Critical");
        assert_eq!(json[0]["type"], "error");
        assert_eq!(
            json[0]["text"],
            "Address 3 critical compliance issues immediately"
        );
        assert_eq!(json[1]["priority"], "High");
        assert_eq!(json[1]["type"], "warning");
        assert_eq!(json[2]["priority"], "Medium");
        assert_eq!(json[2]["type"], "info");
    }
}

//! The built-in healthcare AI governance catalog.
//!
//! Five weighted categories covering the governance posture of a deployed
//! clinical language model. Weights reflect relative regulatory exposure:
//! clinical safety carries the most, accountability structure the least.

use super::types::{Catalog, Category, Question, QuestionKind};

/// Name of the built-in catalog, used in report labels and filenames.
pub const BUILTIN_CATALOG_NAME: &str = "healthcare-llm-governance";

/// Build the built-in healthcare LLM governance catalog.
///
/// The definition is fixed at compile time and satisfies every construction
/// invariant, so this never fails.
pub fn healthcare_llm_governance() -> Catalog {
    let categories = vec![
        Category::new(
            "data_privacy",
            "Data Privacy & Security",
            0.25,
            vec![
                Question::new(
                    "hipaa_compliance",
                    "Is the LLM fully HIPAA compliant?",
                    QuestionKind::Boolean,
                )
                .critical(),
                Question::new(
                    "data_encryption",
                    "Is all PHI encrypted at rest and in transit?",
                    QuestionKind::Boolean,
                )
                .critical(),
                Question::new(
                    "access_controls",
                    "Are proper access controls implemented?",
                    QuestionKind::Scale { max: 5 },
                ),
                Question::new(
                    "audit_logging",
                    "Is comprehensive audit logging enabled?",
                    QuestionKind::Boolean,
                ),
            ],
        ),
        Category::new(
            "clinical_safety",
            "Clinical Safety & Efficacy",
            0.30,
            vec![
                Question::new(
                    "fda_approval",
                    "Does the LLM have appropriate FDA clearance?",
                    QuestionKind::Select {
                        options: vec![
                            "Yes".to_string(),
                            "Not Required".to_string(),
                            "Pending".to_string(),
                            "No".to_string(),
                        ],
                    },
                ),
                Question::new(
                    "clinical_validation",
                    "Has clinical validation been performed?",
                    QuestionKind::Boolean,
                )
                .critical(),
                Question::new(
                    "error_rate",
                    "What is the documented error rate?",
                    QuestionKind::Number {
                        unit: Some("%".to_string()),
                    },
                ),
                Question::new(
                    "human_oversight",
                    "Level of required human oversight",
                    QuestionKind::Scale { max: 5 },
                ),
            ],
        ),
        Category::new(
            "bias_fairness",
            "Bias & Fairness",
            0.20,
            vec![
                Question::new(
                    "demographic_testing",
                    "Has the model been tested across demographics?",
                    QuestionKind::Boolean,
                ),
                Question::new(
                    "bias_mitigation",
                    "Are bias mitigation strategies implemented?",
                    QuestionKind::Scale { max: 5 },
                ),
                Question::new(
                    "fairness_metrics",
                    "Are fairness metrics regularly monitored?",
                    QuestionKind::Boolean,
                ),
                Question::new(
                    "diverse_training",
                    "Was training data demographically diverse?",
                    QuestionKind::Scale { max: 5 },
                ),
            ],
        ),
        Category::new(
            "transparency",
            "Transparency & Explainability",
            0.15,
            vec![
                Question::new(
                    "model_documentation",
                    "Is model documentation comprehensive?",
                    QuestionKind::Scale { max: 5 },
                ),
                Question::new(
                    "decision_explainability",
                    "Can the model explain its decisions?",
                    QuestionKind::Boolean,
                ),
                Question::new(
                    "training_data_documented",
                    "Is training data well documented?",
                    QuestionKind::Scale { max: 5 },
                ),
                Question::new(
                    "version_control",
                    "Is model versioning properly managed?",
                    QuestionKind::Boolean,
                ),
            ],
        ),
        Category::new(
            "governance",
            "Governance & Accountability",
            0.10,
            vec![
                Question::new(
                    "governance_framework",
                    "Is there a formal governance framework?",
                    QuestionKind::Boolean,
                ),
                Question::new(
                    "incident_response",
                    "Is there an incident response plan?",
                    QuestionKind::Boolean,
                )
                .critical(),
                Question::new(
                    "regular_audits",
                    "Are regular audits conducted?",
                    QuestionKind::Scale { max: 5 },
                ),
                Question::new(
                    "stakeholder_engagement",
                    "Level of stakeholder engagement",
                    QuestionKind::Scale { max: 5 },
                ),
            ],
        ),
    ];

    Catalog::new(BUILTIN_CATALOG_NAME, categories)
        .expect("built-in catalog definition is valid")
}

impl Catalog {
    /// The built-in healthcare LLM governance catalog.
    #[must_use]
    pub fn builtin() -> Self {
        healthcare_llm_governance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validation::Validatable;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = healthcare_llm_governance();
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = healthcare_llm_governance();
        assert_eq!(catalog.name, BUILTIN_CATALOG_NAME);
        assert_eq!(catalog.categories.len(), 5);
        assert_eq!(catalog.question_count(), 20);
        assert_eq!(catalog.critical_question_count(), 4);
    }

    #[test]
    fn test_builtin_weights_sum_to_one() {
        let catalog = healthcare_llm_governance();
        assert!((catalog.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_builtin_category_order() {
        let catalog = healthcare_llm_governance();
        let ids: Vec<&str> = catalog
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "data_privacy",
                "clinical_safety",
                "bias_fairness",
                "transparency",
                "governance"
            ]
        );
    }

    #[test]
    fn test_builtin_critical_questions() {
        let catalog = healthcare_llm_governance();
        let critical: Vec<&str> = catalog
            .iter_questions()
            .filter(|(_, q)| q.critical)
            .map(|(_, q)| q.id.as_str())
            .collect();
        assert_eq!(
            critical,
            vec![
                "hipaa_compliance",
                "data_encryption",
                "clinical_validation",
                "incident_response"
            ]
        );
    }
}

//! Catalog validation for govscore.
//!
//! Provides validation traits and implementations for catalog definitions.
//! A catalog that fails validation is rejected at construction, before any
//! assessment can run against it.

use std::collections::HashSet;

use super::types::{Catalog, Category, Question, QuestionKind, WEIGHT_SUM_TOLERANCE};

// ============================================================================
// Catalog Issue
// ============================================================================

/// A single problem found while validating a catalog definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl CatalogIssue {
    /// Create a new issue
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for CatalogIssue {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable catalog definition types.
pub trait Validatable {
    /// Validate the definition, returning every problem found.
    fn validate(&self) -> Vec<CatalogIssue>;

    /// Check if the definition is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for Question {
    fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let field = format!("question '{}'", self.id);

        if self.id.as_str().is_empty() {
            issues.push(CatalogIssue::new("question.id", "id must not be empty"));
        }
        if self.text.trim().is_empty() {
            issues.push(CatalogIssue::new(
                field.clone(),
                "text must not be empty",
            ));
        }

        match &self.kind {
            QuestionKind::Scale { max } => {
                if *max < 2 {
                    issues.push(CatalogIssue::new(
                        field.clone(),
                        format!("scale max must be at least 2, got {max}"),
                    ));
                }
            }
            QuestionKind::Select { options } => {
                if options.is_empty() {
                    issues.push(CatalogIssue::new(
                        field.clone(),
                        "select question needs at least one option",
                    ));
                }
                let mut seen = HashSet::new();
                for option in options {
                    if !seen.insert(option.as_str()) {
                        issues.push(CatalogIssue::new(
                            field.clone(),
                            format!("duplicate option '{option}'"),
                        ));
                    }
                }
            }
            QuestionKind::Boolean | QuestionKind::Number { .. } => {}
        }

        issues
    }
}

impl Validatable for Category {
    fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let field = format!("category '{}'", self.id);

        if self.id.as_str().is_empty() {
            issues.push(CatalogIssue::new("category.id", "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            issues.push(CatalogIssue::new(
                field.clone(),
                "name must not be empty",
            ));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 || self.weight > 1.0 {
            issues.push(CatalogIssue::new(
                field.clone(),
                format!(
                    "weight must be a finite value in (0.0, 1.0], got {}",
                    self.weight
                ),
            ));
        }
        if self.questions.is_empty() {
            issues.push(CatalogIssue::new(field, "category has no questions"));
        }

        for question in &self.questions {
            issues.extend(question.validate());
        }

        issues
    }
}

impl Validatable for Catalog {
    fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(CatalogIssue::new("name", "catalog name must not be empty"));
        }
        if self.categories.is_empty() {
            issues.push(CatalogIssue::new(
                "categories",
                "catalog has no categories",
            ));
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                issues.push(CatalogIssue::new(
                    "categories",
                    format!("duplicate category id '{}'", category.id),
                ));
            }
            issues.extend(category.validate());
        }

        // Question ids key answer stores across the whole catalog, so they
        // must be unique between categories too.
        let mut question_ids = HashSet::new();
        for (_, question) in self.iter_questions() {
            if !question_ids.insert(question.id.as_str()) {
                issues.push(CatalogIssue::new(
                    "questions",
                    format!("duplicate question id '{}'", question.id),
                ));
            }
        }

        // Skip the sum check when individual weights are already broken;
        // one bad weight would otherwise produce two issues for one mistake.
        let weights_individually_ok = self
            .categories
            .iter()
            .all(|c| c.weight.is_finite() && c.weight > 0.0 && c.weight <= 1.0);
        if !self.categories.is_empty() && weights_individually_ok {
            let total = self.total_weight();
            if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                issues.push(CatalogIssue::new(
                    "weights",
                    format!("category weights sum to {total:.4}, expected 1.0"),
                ));
            }
        }

        issues
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Category, Question, QuestionKind};

    fn boolean(id: &str) -> Question {
        Question::new(id, "A question?", QuestionKind::Boolean)
    }

    fn valid_catalog() -> Catalog {
        Catalog {
            name: "test".to_string(),
            categories: vec![
                Category::new("a", "A", 0.5, vec![boolean("q1")]),
                Category::new("b", "B", 0.5, vec![boolean("q2")]),
            ],
        }
    }

    #[test]
    fn test_valid_catalog_passes() {
        assert!(valid_catalog().is_valid());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut catalog = valid_catalog();
        catalog.categories[0].weight = 0.4;
        let issues = catalog.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "weights");
        assert!(issues[0].message.contains("0.9000"), "got: {}", issues[0].message);
    }

    #[test]
    fn test_weight_out_of_range() {
        let mut catalog = valid_catalog();
        catalog.categories[0].weight = 0.0;
        assert!(!catalog.is_valid());

        catalog.categories[0].weight = f64::NAN;
        assert!(!catalog.is_valid());

        catalog.categories[0].weight = 1.5;
        assert!(!catalog.is_valid());
    }

    #[test]
    fn test_bad_weight_reports_single_issue() {
        let mut catalog = valid_catalog();
        catalog.categories[0].weight = 2.0;
        let issues = catalog.validate();
        assert_eq!(issues.len(), 1, "sum check should be skipped: {issues:?}");
    }

    #[test]
    fn test_duplicate_question_ids_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[1].questions = vec![boolean("q1")];
        let issues = catalog.validate();
        assert!(issues
            .iter()
            .any(|i| i.message.contains("duplicate question id 'q1'")));
    }

    #[test]
    fn test_duplicate_category_ids_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[1].id = "a".into();
        let issues = catalog.validate();
        assert!(issues
            .iter()
            .any(|i| i.message.contains("duplicate category id 'a'")));
    }

    #[test]
    fn test_scale_max_below_two_rejected() {
        let question = Question::new("rating", "Rate it", QuestionKind::Scale { max: 1 });
        let issues = question.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("at least 2"));
    }

    #[test]
    fn test_select_needs_options() {
        let question = Question::new(
            "approval",
            "Approved?",
            QuestionKind::Select { options: vec![] },
        );
        assert!(!question.is_valid());
    }

    #[test]
    fn test_select_duplicate_options_rejected() {
        let question = Question::new(
            "approval",
            "Approved?",
            QuestionKind::Select {
                options: vec!["Yes".to_string(), "No".to_string(), "Yes".to_string()],
            },
        );
        let issues = question.validate();
        assert!(issues.iter().any(|i| i.message.contains("duplicate option 'Yes'")));
    }

    #[test]
    fn test_critical_flag_allowed_on_any_kind() {
        // The scoring engine only consults the flag on boolean questions,
        // but the definition itself is legal anywhere.
        let question =
            Question::new("rating", "Rate it", QuestionKind::Scale { max: 5 }).critical();
        assert!(question.is_valid());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = Catalog {
            name: "empty".to_string(),
            categories: vec![],
        };
        let issues = catalog.validate();
        assert!(issues.iter().any(|i| i.field == "categories"));
    }

    #[test]
    fn test_empty_category_rejected() {
        let mut catalog = valid_catalog();
        catalog.categories[0].questions.clear();
        assert!(!catalog.is_valid());
    }

    #[test]
    fn test_issue_display() {
        let issue = CatalogIssue::new("weights", "category weights sum to 0.9, expected 1.0");
        assert_eq!(
            issue.to_string(),
            "weights: category weights sum to 0.9, expected 1.0"
        );
    }
}

//! Core catalog types for governance assessments.
//!
//! A catalog is the immutable questionnaire an assessment runs against: a set
//! of weighted categories, each holding typed questions. Catalogs are plain
//! data once constructed; all scoring behavior lives in [`crate::scoring`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

use super::validation::Validatable;

/// Tolerance when checking that category weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier for a category within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a new category id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Stable identifier for a question, unique across the whole catalog.
///
/// Answer stores and answer sheets are keyed by question id alone, so ids
/// must not repeat between categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new question id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ============================================================================
// Questions
// ============================================================================

/// The answer shape a question accepts, with its scoring parameters.
///
/// Serialized with an internal `type` tag so catalog files read naturally:
///
/// ```yaml
/// - id: access_controls
///   text: Role-based access controls implemented?
///   type: scale
///   max: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Yes/no question; yes scores 100, no scores 0.
    Boolean,
    /// Rating on an integer scale from 1 to `max`; scores `value / max * 100`.
    Scale {
        #[schemars(range(min = 2))]
        max: u32,
    },
    /// Choice from a fixed option list; earlier options score higher.
    Select { options: Vec<String> },
    /// Non-negative measurement where lower is better, such as an error rate.
    /// Scores `100 - value * 10`, floored at 0.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
}

impl QuestionKind {
    /// Short label for this kind, used in error messages and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Boolean => "boolean",
            QuestionKind::Scale { .. } => "scale",
            QuestionKind::Select { .. } => "select",
            QuestionKind::Number { .. } => "number",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Question {
    /// Identifier, unique across the catalog
    pub id: QuestionId,
    /// Prompt shown to the assessor
    pub text: String,
    /// Answer shape and scoring parameters
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Whether a failing boolean answer counts as a critical compliance issue.
    /// Only meaningful on boolean questions; ignored elsewhere.
    #[serde(default)]
    pub critical: bool,
}

impl Question {
    /// Create a non-critical question
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            critical: false,
        }
    }

    /// Mark this question as critical
    #[must_use]
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }
}

// ============================================================================
// Categories and the catalog
// ============================================================================

/// A weighted group of questions covering one governance concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    /// Identifier, unique across the catalog
    pub id: CategoryId,
    /// Human-readable display name
    pub name: String,
    /// Relative importance of this category. Weights across the catalog
    /// must sum to 1.0.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub weight: f64,
    /// The questions in this category
    pub questions: Vec<Question>,
}

impl Category {
    /// Create a new category
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        weight: f64,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            questions,
        }
    }
}

/// A complete, validated questionnaire definition.
///
/// Construct through [`Catalog::new`] or the loaders in [`crate::catalog::file`];
/// both reject definitions that violate the construction invariants (weights
/// summing to 1.0, unique ids, well-formed question parameters) and report
/// every problem found at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Catalog name, used to label reports and suggested filenames
    pub name: String,
    /// Weighted categories in display order
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting definitions that violate construction
    /// invariants. All problems are reported together.
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Result<Self> {
        Self {
            name: name.into(),
            categories,
        }
        .ensure_valid()
    }

    /// Validate this catalog, consuming and returning it if sound.
    pub fn ensure_valid(self) -> Result<Self> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(crate::error::GovScoreError::invalid_catalog(
                self.name.clone(),
                issues,
            ))
        }
    }

    /// Find a question and its enclosing category by question id.
    pub fn find_question(&self, id: &QuestionId) -> Option<(&Category, &Question)> {
        self.categories.iter().find_map(|category| {
            category
                .questions
                .iter()
                .find(|q| &q.id == id)
                .map(|q| (category, q))
        })
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.find_question(id).map(|(_, q)| q)
    }

    /// Whether the catalog contains a question with this id.
    pub fn contains_question(&self, id: &QuestionId) -> bool {
        self.find_question(id).is_some()
    }

    /// Iterate over every question with its enclosing category, in catalog order.
    pub fn iter_questions(&self) -> impl Iterator<Item = (&Category, &Question)> {
        self.categories
            .iter()
            .flat_map(|category| category.questions.iter().map(move |q| (category, q)))
    }

    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Number of questions marked critical.
    pub fn critical_question_count(&self) -> usize {
        self.iter_questions().filter(|(_, q)| q.critical).count()
    }

    /// Sum of category weights. Valid catalogs return a value within
    /// [`WEIGHT_SUM_TOLERANCE`] of 1.0.
    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(|c| c.weight).sum()
    }

    /// Start building a catalog programmatically.
    pub fn builder(name: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(name)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for programmatic catalog construction.
///
/// # Example
///
/// ```rust,ignore
/// let catalog = Catalog::builder("minimal")
///     .category(Category::new("privacy", "Privacy", 1.0, vec![
///         Question::new("encrypted", "Is data encrypted?", QuestionKind::Boolean).critical(),
///     ]))
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    name: String,
    categories: Vec<Category>,
}

impl CatalogBuilder {
    /// Create a new builder for a catalog with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
        }
    }

    /// Add a category
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Finish building, validating the full definition.
    pub fn build(self) -> Result<Catalog> {
        Catalog::new(self.name, self.categories)
    }
}

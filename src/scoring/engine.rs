//! Weighted scoring engine.
//!
//! Scores are computed by walking every question in the catalog. Each
//! question can earn up to `category.weight * 100` points; the final score
//! normalizes earned points against possible points back onto a 0..100
//! scale. A category's weight therefore counts once per question it
//! contains, so categories with more questions carry proportionally more
//! of the total. That behavior is documented and relied upon downstream.

use serde::{Deserialize, Serialize};

use crate::answer::{clamp_number, AnswerStore, AnswerValue, SCALE_MIN};
use crate::catalog::{Catalog, CategoryId, Question, QuestionKind};
use crate::scoring::{RiskLevel, ScoringPolicy, UnansweredPolicy};

/// Points a single question can earn before category weighting.
const QUESTION_MAX_POINTS: f64 = 100.0;

// ============================================================================
// Score result
// ============================================================================

/// Outcome of scoring one answer store against one catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ScoreResult {
    /// Normalized score in 0..=100, unrounded
    pub final_score: f64,
    /// Number of critical boolean questions answered `false`
    pub critical_issues: usize,
    /// Questions with a recorded answer
    pub answered: usize,
    /// Questions in the catalog
    pub total_questions: usize,
}

impl ScoreResult {
    /// The score as shown to users, rounded to the nearest integer.
    #[must_use]
    pub fn display_score(&self) -> u32 {
        self.final_score.round() as u32
    }

    /// Risk classification of the displayed score.
    ///
    /// Classification follows the rounded score users see, so a raw 79.6
    /// displays as 80 and classifies as low risk.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(f64::from(self.display_score()))
    }

    /// True when every catalog question has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.total_questions
    }
}

/// Per-category contribution to the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category identifier
    pub id: CategoryId,
    /// Human-readable category name
    pub name: String,
    /// Category weight from the catalog
    pub weight: f64,
    /// Answered questions in this category
    pub answered: usize,
    /// Total questions in this category
    pub question_count: usize,
    /// Weighted points earned
    pub earned: f64,
    /// Weighted points possible under the active policy
    pub possible: f64,
    /// Earned over possible as a percentage, 0 when nothing was possible
    pub percent: f64,
}

// ============================================================================
// Engine
// ============================================================================

/// Computes risk scores from catalogs and answer stores.
///
/// The engine is total: any combination of catalog and answers produces a
/// result. Out-of-range values are clamped, answers whose shape does not
/// match the question score zero, and stored answers for unknown question
/// ids are ignored. Rejecting such input is the job of the mutation
/// boundary, not the scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    /// Create an engine with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit policy.
    #[must_use]
    pub const fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// The active scoring policy.
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Score `answers` against `catalog`.
    pub fn score(&self, catalog: &Catalog, answers: &AnswerStore) -> ScoreResult {
        let mut total_weighted = 0.0_f64;
        let mut total_possible = 0.0_f64;
        let mut critical_issues = 0_usize;
        let mut answered = 0_usize;

        for (category, question) in catalog.iter_questions() {
            let answer = answers.get(&question.id);

            let counts_toward_possible = match self.policy.unanswered {
                UnansweredPolicy::ScoreAsZero => true,
                UnansweredPolicy::ExcludeFromDenominator => answer.is_some(),
            };
            if counts_toward_possible {
                total_possible += category.weight * QUESTION_MAX_POINTS;
            }

            let Some(value) = answer else {
                continue;
            };
            answered += 1;

            let points = question_points(question, value, &mut critical_issues);
            total_weighted += points * category.weight;
        }

        let final_score = if total_possible > 0.0 {
            (total_weighted / total_possible) * 100.0
        } else {
            0.0
        };

        ScoreResult {
            final_score,
            critical_issues,
            answered,
            total_questions: catalog.question_count(),
        }
    }

    /// Break the score down by category.
    ///
    /// Uses the same point arithmetic as [`score`](Self::score), so summing
    /// `earned` and `possible` across categories reproduces the totals
    /// behind the final score.
    pub fn category_breakdown(
        &self,
        catalog: &Catalog,
        answers: &AnswerStore,
    ) -> Vec<CategoryScore> {
        let mut breakdown = Vec::with_capacity(catalog.categories.len());

        for category in &catalog.categories {
            let mut earned = 0.0_f64;
            let mut possible = 0.0_f64;
            let mut answered = 0_usize;
            let mut ignored_criticals = 0_usize;

            for question in &category.questions {
                let answer = answers.get(&question.id);

                let counts_toward_possible = match self.policy.unanswered {
                    UnansweredPolicy::ScoreAsZero => true,
                    UnansweredPolicy::ExcludeFromDenominator => answer.is_some(),
                };
                if counts_toward_possible {
                    possible += category.weight * QUESTION_MAX_POINTS;
                }

                let Some(value) = answer else {
                    continue;
                };
                answered += 1;
                earned += question_points(question, value, &mut ignored_criticals) * category.weight;
            }

            let percent = if possible > 0.0 {
                (earned / possible) * 100.0
            } else {
                0.0
            };

            breakdown.push(CategoryScore {
                id: category.id.clone(),
                name: category.name.clone(),
                weight: category.weight,
                answered,
                question_count: category.questions.len(),
                earned,
                possible,
                percent,
            });
        }

        breakdown
    }
}

/// Points earned by one answered question, before category weighting.
///
/// Increments `critical_issues` when a critical boolean question is
/// answered `false`. The critical flag is consulted nowhere else, so it is
/// inert on scale, select, and number questions.
fn question_points(question: &Question, value: &AnswerValue, critical_issues: &mut usize) -> f64 {
    match (&question.kind, value) {
        (QuestionKind::Boolean, AnswerValue::Boolean(answer)) => {
            if question.critical && !answer {
                *critical_issues += 1;
            }
            if *answer {
                QUESTION_MAX_POINTS
            } else {
                0.0
            }
        }
        (QuestionKind::Scale { max }, AnswerValue::Scale(value)) => {
            let clamped = (*value).clamp(SCALE_MIN, *max);
            f64::from(clamped) / f64::from(*max) * QUESTION_MAX_POINTS
        }
        (QuestionKind::Select { options }, AnswerValue::Select(choice)) => {
            match options.iter().position(|option| option == choice) {
                Some(0) => 100.0,
                Some(1) => 75.0,
                Some(2) => 50.0,
                _ => 0.0,
            }
        }
        (QuestionKind::Number { .. }, AnswerValue::Number(value)) => {
            let clamped = clamp_number(*value);
            (QUESTION_MAX_POINTS - clamped * 10.0).max(0.0)
        }
        // Shape mismatch: the mutation boundary rejects these, but stores
        // built by hand can contain them. They earn nothing.
        _ => 0.0,
    }
}

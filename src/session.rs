//! Assessment session state.
//!
//! An [`AssessmentSession`] owns the answers for one assessment run against
//! a shared catalog and keeps the score, risk level, and recommendations in
//! sync with them. Every mutation goes through validation against the
//! catalog and triggers a synchronous recompute, so queries never observe a
//! stale score.
//!
//! Sessions are single-threaded by design. The catalog is behind an `Arc`
//! so concurrent assessments can share one copy, each with its own session.

use std::sync::Arc;

use crate::answer::{AnswerSheet, AnswerStore, AnswerValue};
use crate::catalog::{Catalog, QuestionId};
use crate::error::AnswerError;
use crate::report::Report;
use crate::scoring::{
    generate_recommendations, CategoryScore, Recommendation, RiskLevel, ScoreResult, ScoringEngine,
    ScoringPolicy,
};

/// One answer-sheet entry the session refused to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRejection {
    /// Question id the entry was keyed under
    pub question: QuestionId,
    /// Why the entry was rejected
    pub error: AnswerError,
}

/// Result of applying a whole answer sheet to a session.
///
/// Applying a sheet never aborts: valid entries are recorded and invalid
/// ones are collected here, so one bad row does not discard the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct SheetOutcome {
    /// Entries recorded into the session
    pub applied: usize,
    /// Entries refused, in sheet order
    pub rejections: Vec<SheetRejection>,
}

impl SheetOutcome {
    /// True when every entry was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Mutable state of one assessment run.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    catalog: Arc<Catalog>,
    engine: ScoringEngine,
    answers: AnswerStore,
    result: ScoreResult,
    recommendations: Vec<Recommendation>,
}

impl AssessmentSession {
    /// Start an empty session against a catalog, using the default policy.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_engine(catalog, ScoringEngine::new())
    }

    /// Start an empty session with an explicit scoring policy.
    pub fn with_policy(catalog: Arc<Catalog>, policy: ScoringPolicy) -> Self {
        Self::with_engine(catalog, ScoringEngine::with_policy(policy))
    }

    fn with_engine(catalog: Arc<Catalog>, engine: ScoringEngine) -> Self {
        let answers = AnswerStore::new();
        let result = engine.score(&catalog, &answers);
        let recommendations = generate_recommendations(&result);
        Self {
            catalog,
            engine,
            answers,
            result,
            recommendations,
        }
    }

    /// Record one answer.
    ///
    /// The value is checked against the question it answers: the question
    /// must exist, the value's shape must match the question kind, select
    /// answers must come from the question's options, and out-of-range
    /// scale and number values are clamped before storage. On error the
    /// session is unchanged.
    pub fn set_answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: impl Into<AnswerValue>,
    ) -> Result<(), AnswerError> {
        let id = id.into();
        let value = value.into();

        let coerced = match self.catalog.find_question(&id) {
            Some((_, question)) => value.coerce_for(question)?,
            None => return Err(AnswerError::UnknownQuestion(id)),
        };

        self.answers.insert(id, coerced);
        self.recompute();
        Ok(())
    }

    /// Apply every entry of an answer sheet, collecting rejections.
    ///
    /// Entries apply in sheet order, so a later entry for the same question
    /// overwrites an earlier one. The score is recomputed once at the end.
    pub fn apply_sheet(&mut self, sheet: &AnswerSheet) -> SheetOutcome {
        let mut outcome = SheetOutcome::default();

        for (id, raw) in sheet.iter() {
            let resolved = match self.catalog.find_question(id) {
                Some((_, question)) => raw
                    .clone()
                    .into_value_for(question)
                    .and_then(|value| value.coerce_for(question)),
                None => Err(AnswerError::UnknownQuestion(id.clone())),
            };

            match resolved {
                Ok(value) => {
                    self.answers.insert(id.clone(), value);
                    outcome.applied += 1;
                }
                Err(error) => outcome.rejections.push(SheetRejection {
                    question: id.clone(),
                    error,
                }),
            }
        }

        self.recompute();
        outcome
    }

    fn recompute(&mut self) {
        self.result = self.engine.score(&self.catalog, &self.answers);
        self.recommendations = generate_recommendations(&self.result);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The catalog this session assesses against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recorded answers, in insertion order.
    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Current score, always consistent with the recorded answers.
    #[must_use]
    pub fn score_result(&self) -> &ScoreResult {
        &self.result
    }

    /// Current recommendations, in priority order.
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Risk classification of the current displayed score.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        self.result.risk_level()
    }

    /// Per-category score contributions, in catalog order.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryScore> {
        self.engine.category_breakdown(&self.catalog, &self.answers)
    }

    /// Snapshot the session into an exportable report.
    ///
    /// The report deep-copies what it needs, so the session can keep
    /// mutating afterwards without affecting exported data.
    #[must_use]
    pub fn export_report(&self) -> Report {
        Report::from_session(self)
    }
}

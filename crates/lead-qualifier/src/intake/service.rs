use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{IntakeId, IntakeRecord, IntakeStatus, IntakeSubmission, QualificationPolicy};
use super::repository::{IntakeRepository, RepositoryError};
use super::validation::{IntakeValidator, IntakeViolation};
use crate::qualification::ScoringEngine;

/// Service composing intake validation, the repository, and the scoring engine.
pub struct LeadIntakeService<R> {
    validator: IntakeValidator,
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    policy: QualificationPolicy,
}

static INTAKE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_intake_id() -> IntakeId {
    let id = INTAKE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    IntakeId(format!("intake-{id:06}"))
}

impl<R> LeadIntakeService<R>
where
    R: IntakeRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<ScoringEngine>, policy: QualificationPolicy) -> Self {
        Self {
            validator: IntakeValidator,
            repository,
            engine,
            policy,
        }
    }

    pub fn policy(&self) -> QualificationPolicy {
        self.policy
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate, store and qualify a new intake form.
    pub fn submit(&self, submission: IntakeSubmission) -> Result<IntakeRecord, IntakeServiceError> {
        self.validator.validate(&submission)?;

        let record = IntakeRecord {
            id: next_intake_id(),
            submission,
            status: IntakeStatus::Submitted,
            qualification: None,
            submitted_at: Utc::now(),
            scored_at: None,
        };
        let stored = self.repository.insert(record)?;
        debug!(intake_id = %stored.id.0, "intake form stored");

        self.qualify(stored)
    }

    /// Score the stored form again and replace the previous qualification.
    pub fn rescore(&self, intake_id: &IntakeId) -> Result<IntakeRecord, IntakeServiceError> {
        let record = self
            .repository
            .fetch(intake_id)?
            .ok_or(RepositoryError::NotFound)?;

        self.qualify(record)
    }

    /// Fetch an intake record and current status for API responses.
    pub fn get(&self, intake_id: &IntakeId) -> Result<IntakeRecord, IntakeServiceError> {
        let record = self
            .repository
            .fetch(intake_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Score every stored form that has not been qualified yet.
    pub fn qualify_pending(&self, limit: usize) -> Result<Vec<IntakeRecord>, IntakeServiceError> {
        self.repository
            .pending(limit)?
            .into_iter()
            .map(|record| self.qualify(record))
            .collect()
    }

    fn qualify(&self, mut record: IntakeRecord) -> Result<IntakeRecord, IntakeServiceError> {
        let result = self.engine.score(&record.submission.form);

        record.status = self.policy.status_for(result.overall_score);
        record.scored_at = Some(Utc::now());
        record.qualification = Some(result);

        self.repository.update(record.clone())?;

        info!(
            intake_id = %record.id.0,
            status = record.status.label(),
            overall_score = record.qualification.as_ref().map(|result| result.overall_score),
            "intake form qualified"
        );

        Ok(record)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeServiceError {
    #[error(transparent)]
    Invalid(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

//! Intake handling around the scoring engine: validate a submission, store it, qualify it, and
//! persist the result together with the status it implies.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    IntakeId, IntakeRecord, IntakeStatus, IntakeStatusView, IntakeSubmission, QualificationPolicy,
};
pub use repository::{IntakeRepository, RepositoryError};
pub use router::intake_router;
pub use service::{IntakeServiceError, LeadIntakeService};
pub use validation::{IntakeValidator, IntakeViolation};

use super::domain::{IntakeId, IntakeRecord};

/// Storage abstraction so the intake service can be exercised in isolation.
///
/// `update` replaces the whole record, which is how score and status land together.
pub trait IntakeRepository: Send + Sync {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError>;
    fn update(&self, record: IntakeRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError>;
    /// Records that have not been scored yet, oldest first.
    fn pending(&self, limit: usize) -> Result<Vec<IntakeRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

use lead_qualifier::intake::{
    IntakeId, IntakeRecord, IntakeRepository, IntakeStatus, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryIntakeRepository {
    records: Arc<Mutex<HashMap<IntakeId, IntakeRecord>>>,
}

impl IntakeRepository for InMemoryIntakeRepository {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: IntakeRecord) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<IntakeRecord>, RepositoryError> {
        let guard = self.lock()?;
        let mut pending: Vec<IntakeRecord> = guard
            .values()
            .filter(|record| record.status == IntakeStatus::Submitted)
            .cloned()
            .collect();
        pending.sort_by_key(|record| record.submitted_at);
        pending.truncate(limit);
        Ok(pending)
    }
}

impl InMemoryIntakeRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<IntakeId, IntakeRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("intake store poisoned".to_string()))
    }

    pub(crate) fn all(&self) -> Result<Vec<IntakeRecord>, RepositoryError> {
        let guard = self.lock()?;
        let mut records: Vec<IntakeRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(records)
    }
}

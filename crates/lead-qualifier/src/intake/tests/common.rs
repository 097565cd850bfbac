use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::intake::domain::{IntakeId, IntakeRecord, IntakeStatus, IntakeSubmission};
use crate::intake::repository::{IntakeRepository, RepositoryError};
use crate::intake::{intake_router, LeadIntakeService, QualificationPolicy};
use crate::qualification::{
    BudgetRange, FormChoice, IntakeFormData, ProjectType, ScoringEngine, Timeline,
};

pub(super) fn strong_form() -> IntakeFormData {
    IntakeFormData {
        budget_range: FormChoice::Known(BudgetRange::Over100k),
        timeline: FormChoice::Known(Timeline::SixMonthsPlus),
        project_type: FormChoice::Known(ProjectType::AiIntegration),
        project_description: "building a scalable real-time AI platform".to_string(),
        key_requirements: "increase revenue through automation".to_string(),
        business_goals: Some("growth".to_string()),
    }
}

pub(super) fn weak_form() -> IntakeFormData {
    IntakeFormData {
        budget_range: FormChoice::Known(BudgetRange::Under10k),
        timeline: FormChoice::Known(Timeline::OneToTwoWeeks),
        project_type: FormChoice::Known(ProjectType::Other),
        project_description: "landing page refresh".to_string(),
        key_requirements: String::new(),
        business_goals: None,
    }
}

pub(super) fn submission(form: IntakeFormData) -> IntakeSubmission {
    IntakeSubmission {
        company_name: "Northwind Traders".to_string(),
        contact_name: "Dana Reyes".to_string(),
        contact_email: "dana@northwind.example".to_string(),
        form,
    }
}

pub(super) fn build_service() -> (LeadIntakeService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LeadIntakeService::new(
        repository.clone(),
        Arc::new(ScoringEngine::standard()),
        QualificationPolicy::default(),
    );
    (service, repository)
}

pub(super) fn service_with<R: IntakeRepository + 'static>(
    repository: R,
) -> Arc<LeadIntakeService<R>> {
    Arc::new(LeadIntakeService::new(
        Arc::new(repository),
        Arc::new(ScoringEngine::standard()),
        QualificationPolicy::default(),
    ))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<IntakeId, IntakeRecord>>>,
    pub(super) updates: Arc<Mutex<usize>>,
}

impl MemoryRepository {
    pub(super) fn update_count(&self) -> usize {
        *self.updates.lock().expect("update counter poisoned")
    }

    pub(super) fn seed(&self, record: IntakeRecord) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(record.id.clone(), record);
    }
}

impl IntakeRepository for MemoryRepository {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: IntakeRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        *self.updates.lock().expect("update counter poisoned") += 1;
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<IntakeRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
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

pub(super) struct ConflictRepository;

impl IntakeRepository for ConflictRepository {
    fn insert(&self, _record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: IntakeRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<IntakeRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl IntakeRepository for UnavailableRepository {
    fn insert(&self, _record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: IntakeRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &IntakeId) -> Result<Option<IntakeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<IntakeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: LeadIntakeService<MemoryRepository>) -> axum::Router {
    intake_router(Arc::new(service))
}

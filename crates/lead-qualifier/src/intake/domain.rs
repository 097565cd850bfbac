use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::qualification::{IntakeFormData, QualificationResult};

/// Identifier wrapper for stored intake forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntakeId(pub String);

/// Prospect contact details plus the project intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub form: IntakeFormData,
}

/// High level status tracked for each intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    Submitted,
    UnderReview,
    Qualified,
}

impl IntakeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            IntakeStatus::Submitted => "submitted",
            IntakeStatus::UnderReview => "under_review",
            IntakeStatus::Qualified => "qualified",
        }
    }
}

/// Caller-side policy mapping an overall score to an intake status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationPolicy {
    pub qualified_threshold: u8,
}

impl QualificationPolicy {
    pub const fn status_for(&self, overall_score: u8) -> IntakeStatus {
        if overall_score >= self.qualified_threshold {
            IntakeStatus::Qualified
        } else {
            IntakeStatus::UnderReview
        }
    }
}

impl Default for QualificationPolicy {
    fn default() -> Self {
        Self {
            qualified_threshold: 70,
        }
    }
}

/// Stored intake form together with its latest qualification.
///
/// `status` and `qualification` are always written together in a single repository update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: IntakeId,
    pub submission: IntakeSubmission,
    pub status: IntakeStatus,
    pub qualification: Option<QualificationResult>,
    pub submitted_at: DateTime<Utc>,
    pub scored_at: Option<DateTime<Utc>>,
}

impl IntakeRecord {
    pub fn status_view(&self) -> IntakeStatusView {
        IntakeStatusView {
            intake_id: self.id.clone(),
            company_name: self.submission.company_name.clone(),
            status: self.status.label(),
            overall_score: self
                .qualification
                .as_ref()
                .map(|result| result.overall_score),
            recommended_approach: self
                .qualification
                .as_ref()
                .map(|result| result.recommended_approach.clone())
                .unwrap_or_else(|| "pending qualification".to_string()),
        }
    }
}

/// Public representation of an intake form's status.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeStatusView {
    pub intake_id: IntakeId,
    pub company_name: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<u8>,
    pub recommended_approach: String,
}

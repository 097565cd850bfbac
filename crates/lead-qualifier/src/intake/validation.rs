use super::domain::IntakeSubmission;

/// Upstream checks applied before a submission reaches the scoring engine.
///
/// The engine itself accepts anything; this guard is where the intake handler refuses forms
/// that a person should fix before they are stored.
#[derive(Debug, Clone, Default)]
pub struct IntakeValidator;

impl IntakeValidator {
    pub fn validate(&self, submission: &IntakeSubmission) -> Result<(), IntakeViolation> {
        if submission.company_name.trim().is_empty() {
            return Err(IntakeViolation::MissingField {
                field: "company_name",
            });
        }

        let email = submission.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(IntakeViolation::InvalidEmail(
                submission.contact_email.clone(),
            ));
        }

        let form = &submission.form;
        if !form.budget_range.is_recognized() {
            return Err(IntakeViolation::UnrecognizedOption {
                field: "budget_range",
                value: form.budget_range.as_str().to_string(),
            });
        }
        if !form.timeline.is_recognized() {
            return Err(IntakeViolation::UnrecognizedOption {
                field: "timeline",
                value: form.timeline.as_str().to_string(),
            });
        }
        if !form.project_type.is_recognized() {
            return Err(IntakeViolation::UnrecognizedOption {
                field: "project_type",
                value: form.project_type.as_str().to_string(),
            });
        }

        if form.project_description.trim().is_empty() {
            return Err(IntakeViolation::MissingField {
                field: "project_description",
            });
        }

        Ok(())
    }
}

/// Reason a submission was refused at intake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("'{value}' is not a valid option for {field}")]
    UnrecognizedOption { field: &'static str, value: String },
    #[error("'{0}' is not a valid contact email")]
    InvalidEmail(String),
}

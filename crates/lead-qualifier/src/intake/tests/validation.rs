use super::common::*;
use crate::intake::{IntakeValidator, IntakeViolation};
use crate::qualification::FormChoice;

#[test]
fn accepts_complete_submission() {
    assert_eq!(
        IntakeValidator.validate(&submission(strong_form())),
        Ok(())
    );
}

#[test]
fn requires_company_name() {
    let mut submission = submission(strong_form());
    submission.company_name = "  ".to_string();

    assert_eq!(
        IntakeValidator.validate(&submission),
        Err(IntakeViolation::MissingField {
            field: "company_name"
        })
    );
}

#[test]
fn rejects_contact_email_without_at_sign() {
    let mut submission = submission(strong_form());
    submission.contact_email = "dana.northwind.example".to_string();

    assert!(matches!(
        IntakeValidator.validate(&submission),
        Err(IntakeViolation::InvalidEmail(_))
    ));
}

#[test]
fn rejects_unrecognized_budget_range() {
    let mut form = strong_form();
    form.budget_range = FormChoice::Unrecognized("free".to_string());

    assert_eq!(
        IntakeValidator.validate(&submission(form)),
        Err(IntakeViolation::UnrecognizedOption {
            field: "budget_range",
            value: "free".to_string(),
        })
    );
}

#[test]
fn rejects_blank_project_description() {
    let mut form = weak_form();
    form.project_description = "\n".to_string();

    assert_eq!(
        IntakeValidator.validate(&submission(form)),
        Err(IntakeViolation::MissingField {
            field: "project_description"
        })
    );
}

#[test]
fn empty_requirements_are_allowed() {
    let form = weak_form();
    assert!(form.key_requirements.is_empty());

    assert!(IntakeValidator.validate(&submission(form)).is_ok());
}

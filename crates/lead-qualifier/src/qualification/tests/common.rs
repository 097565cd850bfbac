use crate::qualification::domain::{
    BudgetRange, FormChoice, IntakeFormData, ProjectType, Timeline,
};
use crate::qualification::ScoringEngine;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn form(
    budget: BudgetRange,
    timeline: Timeline,
    project_type: ProjectType,
    description: &str,
    requirements: &str,
) -> IntakeFormData {
    IntakeFormData {
        budget_range: FormChoice::Known(budget),
        timeline: FormChoice::Known(timeline),
        project_type: FormChoice::Known(project_type),
        project_description: description.to_string(),
        key_requirements: requirements.to_string(),
        business_goals: None,
    }
}

/// Large, well-funded AI build with clear revenue goals.
pub(super) fn flagship_form() -> IntakeFormData {
    form(
        BudgetRange::Over100k,
        Timeline::SixMonthsPlus,
        ProjectType::AiIntegration,
        "building a scalable real-time AI platform",
        "increase revenue through automation",
    )
}

/// Smallest budget, rush timeline, nothing else to go on.
pub(super) fn minimal_form() -> IntakeFormData {
    form(
        BudgetRange::Under10k,
        Timeline::OneToTwoWeeks,
        ProjectType::Other,
        "",
        "",
    )
}

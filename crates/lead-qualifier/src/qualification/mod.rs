//! Lead qualification scoring.
//!
//! `ScoringEngine::score` turns an intake form into a bounded, reproducible qualification
//! result. The engine is total: unrecognized enum values and empty text fall through to the
//! lowest or default branch of their factor, and nothing in this module returns an error or
//! touches I/O.

mod analysis;
mod components;
pub mod domain;
pub mod rubric;

#[cfg(test)]
mod tests;

pub use analysis::{LeadAnalysis, Rating};
pub use components::{ComponentScores, ScoreComponent};
pub use domain::{
    BudgetRange, FormChoice, FormValue, IntakeFormData, ProjectType, QualificationFactor,
    Timeline,
};
pub use rubric::{PriorityTier, QualificationRubric, RubricError, ScoringWeights};

use serde::{Deserialize, Serialize};

use rubric::{OPPORTUNITY_RULES, RISK_RULES};

/// Stateless evaluator that applies a rubric to an intake form.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rubric: QualificationRubric,
}

impl ScoringEngine {
    pub fn new(rubric: QualificationRubric) -> Self {
        Self { rubric }
    }

    pub fn standard() -> Self {
        Self::default()
    }

    pub fn rubric(&self) -> &QualificationRubric {
        &self.rubric
    }

    pub fn score(&self, form: &IntakeFormData) -> QualificationResult {
        let (scores, components) = components::score_components(form, &self.rubric);
        let overall_score = components::overall_score(&scores, &self.rubric);
        let priority = analysis::priority(overall_score);

        QualificationResult {
            scores,
            overall_score,
            confidence_level: analysis::confidence(overall_score),
            analysis: analysis::analyze(&scores, &self.rubric),
            risk_factors: analysis::fired_rules(&scores, RISK_RULES),
            opportunity_factors: analysis::fired_rules(&scores, OPPORTUNITY_RULES),
            priority,
            recommended_approach: priority.narrative().to_string(),
            estimated_project_duration: analysis::project_duration(&form.timeline),
            suggested_team_size: analysis::team_size(&scores, overall_score),
            next_steps: analysis::next_steps(overall_score),
            components,
        }
    }
}

/// Score a form with the standard rubric.
pub fn score(form: &IntakeFormData) -> QualificationResult {
    ScoringEngine::standard().score(form)
}

/// Qualification output for one scoring pass. A re-score always yields a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub scores: ComponentScores,
    pub overall_score: u8,
    pub confidence_level: f64,
    pub analysis: LeadAnalysis,
    pub risk_factors: Vec<String>,
    pub opportunity_factors: Vec<String>,
    pub priority: PriorityTier,
    pub recommended_approach: String,
    pub estimated_project_duration: String,
    pub suggested_team_size: u8,
    pub next_steps: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl QualificationResult {
    pub fn summary(&self) -> String {
        format!(
            "score {} ({}), confidence {:.2}, team of {}",
            self.overall_score,
            self.priority.label(),
            self.confidence_level,
            self.suggested_team_size
        )
    }
}

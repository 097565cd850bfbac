use serde::{Deserialize, Serialize};

use super::components::ComponentScores;
use super::domain::{FormChoice, QualificationFactor, Timeline};
use super::rubric::{
    concern_note, lookup, strength_note, FactorRule, PriorityTier, QualificationRubric,
    BASE_TEAM_SIZE, COMPLEX_TEAM_SIZE, COMPLEX_TEAM_THRESHOLD, CONFIDENCE_CEILING,
    CONFIDENCE_FLOOR, EXTENDED_TEAM_COMPLEXITY_THRESHOLD, EXTENDED_TEAM_OVERALL_THRESHOLD,
    EXTENDED_TEAM_SIZE, FALLBACK_NEXT_STEPS, NEXT_STEP_FLOORS, PRIORITY_FLOORS,
    PROJECT_DURATIONS, UNKNOWN_PROJECT_DURATION,
};

/// Three-level rating used for market fit and technical feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub const fn label(self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

/// Qualitative read-out of the component scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadAnalysis {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub market_fit: Rating,
    pub technical_feasibility: Rating,
}

pub(crate) fn analyze(scores: &ComponentScores, rubric: &QualificationRubric) -> LeadAnalysis {
    let (strengths, concerns) = strengths_and_concerns(scores, rubric);

    LeadAnalysis {
        strengths,
        concerns,
        market_fit: rate(scores.market_potential, rubric),
        technical_feasibility: rate(scores.technical_complexity, rubric),
    }
}

fn rate(score: u8, rubric: &QualificationRubric) -> Rating {
    if score >= rubric.strength_threshold {
        Rating::High
    } else if score >= rubric.concern_threshold {
        Rating::Medium
    } else {
        Rating::Low
    }
}

/// Projects every component through the strength/concern thresholds. Scores strictly between
/// the two contribute to neither list.
fn strengths_and_concerns(
    scores: &ComponentScores,
    rubric: &QualificationRubric,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();

    for (factor, score) in scores.iter() {
        if score >= rubric.strength_threshold {
            strengths.push(strength_note(factor).to_string());
        } else if score < rubric.concern_threshold {
            concerns.push(concern_note(factor).to_string());
        }
    }

    (strengths, concerns)
}

/// Evaluates each rule independently; several can fire for the same lead.
pub(crate) fn fired_rules(scores: &ComponentScores, rules: &[FactorRule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.trigger.fires(scores.get(rule.factor)))
        .map(|rule| rule.message.to_string())
        .collect()
}

pub(crate) fn confidence(overall_score: u8) -> f64 {
    (f64::from(overall_score) / 100.0).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

pub(crate) fn priority(overall_score: u8) -> PriorityTier {
    PRIORITY_FLOORS
        .iter()
        .find(|(floor, _)| overall_score >= *floor)
        .map(|(_, tier)| *tier)
        .unwrap_or(PriorityTier::LowPriority)
}

pub(crate) fn next_steps(overall_score: u8) -> Vec<String> {
    NEXT_STEP_FLOORS
        .iter()
        .find(|(floor, _)| overall_score >= *floor)
        .map(|(_, steps)| *steps)
        .unwrap_or(FALLBACK_NEXT_STEPS)
        .iter()
        .map(|step| step.to_string())
        .collect()
}

pub(crate) fn project_duration(timeline: &FormChoice<Timeline>) -> String {
    timeline
        .known()
        .and_then(|window| lookup(PROJECT_DURATIONS, &window))
        .unwrap_or(UNKNOWN_PROJECT_DURATION)
        .to_string()
}

// The complexity check shadows the overall-score check: a lead with complexity >= 80 always
// gets the complex team, whatever its overall score.
pub(crate) fn team_size(scores: &ComponentScores, overall_score: u8) -> u8 {
    let complexity = scores.get(QualificationFactor::TechnicalComplexity);

    if complexity >= COMPLEX_TEAM_THRESHOLD {
        COMPLEX_TEAM_SIZE
    } else if complexity >= EXTENDED_TEAM_COMPLEXITY_THRESHOLD
        || overall_score >= EXTENDED_TEAM_OVERALL_THRESHOLD
    {
        EXTENDED_TEAM_SIZE
    } else {
        BASE_TEAM_SIZE
    }
}

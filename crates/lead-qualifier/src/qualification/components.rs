use serde::{Deserialize, Serialize};

use super::domain::{FormChoice, FormValue, IntakeFormData, ProjectType, QualificationFactor};
use super::rubric::{
    lookup, QualificationRubric, BUDGET_SCORES, BUSINESS_IMPACT_BASELINE_SCORE,
    BUSINESS_IMPACT_KEYWORDS, BUSINESS_IMPACT_MATCHED_SCORE, COMPLEXITY_BASE_SCORES,
    COMPLEXITY_KEYWORDS, COMPLEXITY_KEYWORD_SCORES, DEFAULT_COMPLEXITY_SCORE,
    MARKET_POTENTIAL_SCORES, TIMELINE_SCORES, UNKNOWN_BUDGET_SCORE,
    UNKNOWN_MARKET_POTENTIAL_SCORE, UNKNOWN_TIMELINE_SCORE,
};

/// The five independent 0-100 sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub budget: u8,
    pub timeline: u8,
    pub technical_complexity: u8,
    pub business_impact: u8,
    pub market_potential: u8,
}

impl ComponentScores {
    pub const fn get(&self, factor: QualificationFactor) -> u8 {
        match factor {
            QualificationFactor::Budget => self.budget,
            QualificationFactor::Timeline => self.timeline,
            QualificationFactor::TechnicalComplexity => self.technical_complexity,
            QualificationFactor::BusinessImpact => self.business_impact,
            QualificationFactor::MarketPotential => self.market_potential,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (QualificationFactor, u8)> + '_ {
        QualificationFactor::ALL
            .into_iter()
            .map(move |factor| (factor, self.get(factor)))
    }
}

/// Discrete contribution to the overall score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: QualificationFactor,
    pub score: u8,
    pub weight_pct: u8,
    pub notes: String,
}

pub(crate) fn score_components(
    form: &IntakeFormData,
    rubric: &QualificationRubric,
) -> (ComponentScores, Vec<ScoreComponent>) {
    let mut notes = Vec::with_capacity(QualificationFactor::ALL.len());

    let budget = match &form.budget_range {
        FormChoice::Known(range) => {
            let score = lookup(BUDGET_SCORES, range).unwrap_or(UNKNOWN_BUDGET_SCORE);
            notes.push(format!("budget range {} scores {score}", form.budget_range));
            score
        }
        FormChoice::Unrecognized(raw) => {
            notes.push(format!("unrecognized budget range '{raw}'"));
            UNKNOWN_BUDGET_SCORE
        }
    };

    let timeline = match &form.timeline {
        FormChoice::Known(window) => {
            let score = lookup(TIMELINE_SCORES, window).unwrap_or(UNKNOWN_TIMELINE_SCORE);
            notes.push(format!("timeline {} scores {score}", form.timeline));
            score
        }
        FormChoice::Unrecognized(raw) => {
            notes.push(format!("unrecognized timeline '{raw}'"));
            UNKNOWN_TIMELINE_SCORE
        }
    };

    let (technical_complexity, complexity_note) =
        technical_complexity(&form.project_type, &form.project_description);
    notes.push(complexity_note);

    let (business_impact, impact_note) =
        business_impact(&form.key_requirements, form.business_goals.as_deref());
    notes.push(impact_note);

    let market_potential = form
        .project_type
        .known()
        .and_then(|project_type| lookup(MARKET_POTENTIAL_SCORES, &project_type))
        .unwrap_or(UNKNOWN_MARKET_POTENTIAL_SCORE);
    notes.push(format!(
        "project type {} has market potential {market_potential}",
        form.project_type
    ));

    let scores = ComponentScores {
        budget,
        timeline,
        technical_complexity,
        business_impact,
        market_potential,
    };

    let components = scores
        .iter()
        .zip(notes)
        .map(|((factor, score), notes)| ScoreComponent {
            factor,
            score,
            weight_pct: rubric.weights.weight_for(factor),
            notes,
        })
        .collect();

    (scores, components)
}

fn technical_complexity(choice: &FormChoice<ProjectType>, description: &str) -> (u8, String) {
    let Some(project_type) = choice.known() else {
        return (
            DEFAULT_COMPLEXITY_SCORE,
            format!("unrecognized project type '{choice}' uses default complexity"),
        );
    };

    let base = lookup(COMPLEXITY_BASE_SCORES, &project_type)
        .unwrap_or(DEFAULT_COMPLEXITY_SCORE);

    if let Some(raised) = lookup(COMPLEXITY_KEYWORD_SCORES, &project_type) {
        let description = description.to_lowercase();
        if let Some(keyword) = first_match(&description, COMPLEXITY_KEYWORDS) {
            return (
                raised,
                format!(
                    "{} description mentions '{keyword}', complexity raised to {raised}",
                    project_type.wire_name()
                ),
            );
        }
    }

    (
        base,
        format!("{} base complexity {base}", project_type.wire_name()),
    )
}

fn business_impact(key_requirements: &str, business_goals: Option<&str>) -> (u8, String) {
    let text = format!("{} {}", key_requirements, business_goals.unwrap_or_default())
        .to_lowercase();

    match first_match(&text, BUSINESS_IMPACT_KEYWORDS) {
        Some(keyword) => (
            BUSINESS_IMPACT_MATCHED_SCORE,
            format!("requirements reference '{keyword}'"),
        ),
        None => (
            BUSINESS_IMPACT_BASELINE_SCORE,
            "no measurable business outcome stated".to_string(),
        ),
    }
}

fn first_match(haystack: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords
        .iter()
        .copied()
        .find(|keyword| haystack.contains(keyword))
}

/// Weighted sum of the component scores, rounded half up and capped at 100.
pub(crate) fn overall_score(scores: &ComponentScores, rubric: &QualificationRubric) -> u8 {
    let weighted: u32 = scores
        .iter()
        .map(|(factor, score)| u32::from(score) * u32::from(rubric.weights.weight_for(factor)))
        .sum();

    ((weighted + 50) / 100).min(100) as u8
}

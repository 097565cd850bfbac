use super::common::*;
use crate::qualification::domain::{BudgetRange, FormChoice, ProjectType, Timeline};
use crate::qualification::{
    score, ComponentScores, PriorityTier, QualificationFactor, QualificationRubric,
    ScoringEngine, ScoringWeights,
};

#[test]
fn flagship_lead_scores_high_priority() {
    let result = engine().score(&flagship_form());

    assert_eq!(
        result.scores,
        ComponentScores {
            budget: 95,
            timeline: 90,
            technical_complexity: 90,
            business_impact: 80,
            market_potential: 95,
        }
    );
    assert_eq!(result.overall_score, 90);
    assert_eq!(result.priority, PriorityTier::HighPriority);
    assert_eq!(
        result.recommended_approach,
        PriorityTier::HighPriority.narrative()
    );
    assert_eq!(result.suggested_team_size, 4);
    assert_eq!(result.estimated_project_duration, "6+ months");
    assert!((result.confidence_level - 0.90).abs() < 1e-9);
}

#[test]
fn minimal_lead_scores_low_priority() {
    let result = engine().score(&minimal_form());

    assert_eq!(
        result.scores,
        ComponentScores {
            budget: 30,
            timeline: 20,
            technical_complexity: 50,
            business_impact: 50,
            market_potential: 50,
        }
    );
    // 7.5 + 4 + 12.5 + 10 + 5
    assert_eq!(result.overall_score, 39);
    assert_eq!(result.priority, PriorityTier::LowPriority);
    assert_eq!(result.suggested_team_size, 2);
    assert_eq!(result.estimated_project_duration, "1-2 weeks");
    assert!((result.confidence_level - 0.39).abs() < 1e-9);
}

#[test]
fn unrecognized_budget_scores_zero_without_failing() {
    let mut form = form(
        BudgetRange::Under10k,
        Timeline::ThreeToSixMonths,
        ProjectType::WebApp,
        "scalable customer portal",
        "drive growth",
    );
    form.budget_range = FormChoice::Unrecognized("free".to_string());

    let result = engine().score(&form);

    assert_eq!(result.scores.budget, 0);
    assert_eq!(result.scores.timeline, 85);
    assert_eq!(result.scores.technical_complexity, 75);
    assert_eq!(result.scores.business_impact, 80);
    assert_eq!(result.scores.market_potential, 70);
    assert_eq!(result.overall_score, 59);
    assert_eq!(result.priority, PriorityTier::Potential);
    assert!(result.components[0].notes.contains("free"));
}

#[test]
fn unrecognized_timeline_and_project_type_use_defaults() {
    let mut form = minimal_form();
    form.timeline = FormChoice::Unrecognized("yesterday".to_string());
    form.project_type = FormChoice::Unrecognized("moonshot".to_string());

    let result = engine().score(&form);

    assert_eq!(result.scores.timeline, 0);
    assert_eq!(result.scores.technical_complexity, 50);
    assert_eq!(result.scores.market_potential, 50);
    assert_eq!(result.estimated_project_duration, "TBD");
}

#[test]
fn app_builds_gain_complexity_from_technical_keywords() {
    let plain_web = form(
        BudgetRange::From25kTo50k,
        Timeline::TwoToThreeMonths,
        ProjectType::WebApp,
        "marketing site with a blog",
        "",
    );
    let advanced_web = form(
        BudgetRange::From25kTo50k,
        Timeline::TwoToThreeMonths,
        ProjectType::WebApp,
        "Marketing site with Real-Time inventory",
        "",
    );
    let plain_mobile = form(
        BudgetRange::From25kTo50k,
        Timeline::TwoToThreeMonths,
        ProjectType::MobileApp,
        "loyalty card app",
        "",
    );
    let advanced_mobile = form(
        BudgetRange::From25kTo50k,
        Timeline::TwoToThreeMonths,
        ProjectType::MobileApp,
        "companion app for IoT sensors",
        "",
    );

    assert_eq!(engine().score(&plain_web).scores.technical_complexity, 60);
    assert_eq!(engine().score(&advanced_web).scores.technical_complexity, 75);
    assert_eq!(engine().score(&plain_mobile).scores.technical_complexity, 65);
    assert_eq!(engine().score(&advanced_mobile).scores.technical_complexity, 80);
}

#[test]
fn keyword_bonus_does_not_apply_to_other_project_types() {
    let form = form(
        BudgetRange::From25kTo50k,
        Timeline::TwoToThreeMonths,
        ProjectType::CustomSoftware,
        "blockchain ledger with machine learning",
        "",
    );

    assert_eq!(engine().score(&form).scores.technical_complexity, 50);
}

#[test]
fn keyword_scan_matches_substrings() {
    // "detailed" contains "ai"
    let form = form(
        BudgetRange::From25kTo50k,
        Timeline::TwoToThreeMonths,
        ProjectType::WebApp,
        "a detailed brochure site",
        "",
    );

    assert_eq!(engine().score(&form).scores.technical_complexity, 75);
}

#[test]
fn business_goals_count_towards_impact() {
    let mut form = minimal_form();
    assert_eq!(engine().score(&form).scores.business_impact, 50);

    form.business_goals = Some("Measurable ROI within a year".to_string());
    assert_eq!(engine().score(&form).scores.business_impact, 80);

    form.business_goals = None;
    form.key_requirements = "Cost Reduction for the ops team".to_string();
    assert_eq!(engine().score(&form).scores.business_impact, 80);
}

#[test]
fn components_report_scores_and_weights_in_factor_order() {
    let result = engine().score(&flagship_form());

    let factors: Vec<QualificationFactor> = result
        .components
        .iter()
        .map(|component| component.factor)
        .collect();
    assert_eq!(factors, QualificationFactor::ALL.to_vec());

    let weight_total: u16 = result
        .components
        .iter()
        .map(|component| u16::from(component.weight_pct))
        .sum();
    assert_eq!(weight_total, 100);
    assert!(result
        .components
        .iter()
        .all(|component| component.score == result.scores.get(component.factor)));
}

#[test]
fn free_function_uses_standard_rubric() {
    assert_eq!(score(&flagship_form()), engine().score(&flagship_form()));
}

#[test]
fn custom_weights_shift_the_overall_score() {
    let budget_heavy = ScoringEngine::new(QualificationRubric {
        weights: ScoringWeights {
            budget: 60,
            timeline: 10,
            technical_complexity: 10,
            business_impact: 10,
            market_potential: 10,
        },
        ..QualificationRubric::default()
    });

    // 30*60 + 20*10 + 50*10 + 50*10 + 50*10 = 3500
    assert_eq!(budget_heavy.score(&minimal_form()).overall_score, 35);
}

#[test]
fn overweighted_rubric_still_caps_at_one_hundred() {
    let engine = ScoringEngine::new(QualificationRubric {
        weights: ScoringWeights {
            budget: 100,
            timeline: 100,
            technical_complexity: 100,
            business_impact: 100,
            market_potential: 100,
        },
        ..QualificationRubric::default()
    });

    let result = engine.score(&flagship_form());
    assert_eq!(result.overall_score, 100);
    assert!((result.confidence_level - 0.95).abs() < 1e-9);
}

#[test]
fn rescoring_returns_an_equal_fresh_value() {
    let form = flagship_form();
    let engine = engine();

    let first = engine.score(&form);
    let second = engine.score(&form);

    assert_eq!(first, second);
}

//! Static scoring tables and tunable weights for lead qualification.
//!
//! Every number and phrase the engine emits is declared here so a weight or threshold change is
//! a single-line edit that never touches the branching logic in `components` or `analysis`.

use serde::{Deserialize, Serialize};

use super::domain::{BudgetRange, ProjectType, QualificationFactor, Timeline};

pub const BUDGET_SCORES: &[(BudgetRange, u8)] = &[
    (BudgetRange::Under10k, 30),
    (BudgetRange::From10kTo25k, 50),
    (BudgetRange::From25kTo50k, 70),
    (BudgetRange::From50kTo100k, 85),
    (BudgetRange::Over100k, 95),
];
pub const UNKNOWN_BUDGET_SCORE: u8 = 0;

pub const TIMELINE_SCORES: &[(Timeline, u8)] = &[
    (Timeline::OneToTwoWeeks, 20),
    (Timeline::OneMonth, 40),
    (Timeline::TwoToThreeMonths, 70),
    (Timeline::ThreeToSixMonths, 85),
    (Timeline::SixMonthsPlus, 90),
];
pub const UNKNOWN_TIMELINE_SCORE: u8 = 0;

/// Base complexity per project type. Types missing here use `DEFAULT_COMPLEXITY_SCORE`.
pub const COMPLEXITY_BASE_SCORES: &[(ProjectType, u8)] = &[
    (ProjectType::AiIntegration, 90),
    (ProjectType::DataAnalytics, 80),
    (ProjectType::ApiDevelopment, 70),
    (ProjectType::ECommerce, 70),
    (ProjectType::WebApp, 60),
    (ProjectType::MobileApp, 65),
];
pub const DEFAULT_COMPLEXITY_SCORE: u8 = 50;

/// Raised complexity for app builds whose description mentions an advanced technology.
pub const COMPLEXITY_KEYWORD_SCORES: &[(ProjectType, u8)] =
    &[(ProjectType::WebApp, 75), (ProjectType::MobileApp, 80)];

pub const COMPLEXITY_KEYWORDS: &[&str] = &[
    "ai",
    "machine learning",
    "blockchain",
    "iot",
    "microservices",
    "scalable",
    "real-time",
];

pub const BUSINESS_IMPACT_KEYWORDS: &[&str] = &[
    "revenue",
    "growth",
    "efficiency",
    "automation",
    "roi",
    "cost reduction",
];
pub const BUSINESS_IMPACT_MATCHED_SCORE: u8 = 80;
pub const BUSINESS_IMPACT_BASELINE_SCORE: u8 = 50;

pub const MARKET_POTENTIAL_SCORES: &[(ProjectType, u8)] = &[
    (ProjectType::AiIntegration, 95),
    (ProjectType::DataAnalytics, 85),
    (ProjectType::ECommerce, 80),
    (ProjectType::MobileApp, 75),
    (ProjectType::WebApp, 70),
    (ProjectType::ApiDevelopment, 65),
    (ProjectType::CustomSoftware, 60),
    (ProjectType::Other, 50),
];
pub const UNKNOWN_MARKET_POTENTIAL_SCORE: u8 = 50;

pub const CONFIDENCE_FLOOR: f64 = 0.30;
pub const CONFIDENCE_CEILING: f64 = 0.95;

pub const PROJECT_DURATIONS: &[(Timeline, &str)] = &[
    (Timeline::OneToTwoWeeks, "1-2 weeks"),
    (Timeline::OneMonth, "1 month"),
    (Timeline::TwoToThreeMonths, "2-3 months"),
    (Timeline::ThreeToSixMonths, "3-6 months"),
    (Timeline::SixMonthsPlus, "6+ months"),
];
pub const UNKNOWN_PROJECT_DURATION: &str = "TBD";

pub const BASE_TEAM_SIZE: u8 = 2;
pub const COMPLEX_TEAM_SIZE: u8 = 4;
pub const COMPLEX_TEAM_THRESHOLD: u8 = 80;
pub const EXTENDED_TEAM_SIZE: u8 = 3;
pub const EXTENDED_TEAM_COMPLEXITY_THRESHOLD: u8 = 60;
pub const EXTENDED_TEAM_OVERALL_THRESHOLD: u8 = 70;

/// Comparison applied to a single component score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Below(u8),
    Above(u8),
    AtLeast(u8),
}

impl Trigger {
    pub const fn fires(self, score: u8) -> bool {
        match self {
            Trigger::Below(limit) => score < limit,
            Trigger::Above(limit) => score > limit,
            Trigger::AtLeast(limit) => score >= limit,
        }
    }
}

/// Threshold check that emits a fixed message when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorRule {
    pub factor: QualificationFactor,
    pub trigger: Trigger,
    pub message: &'static str,
}

pub const RISK_RULES: &[FactorRule] = &[
    FactorRule {
        factor: QualificationFactor::Budget,
        trigger: Trigger::Below(50),
        message: "Limited budget may constrain project scope",
    },
    FactorRule {
        factor: QualificationFactor::Timeline,
        trigger: Trigger::Below(50),
        message: "Aggressive timeline increases delivery risk",
    },
    FactorRule {
        factor: QualificationFactor::TechnicalComplexity,
        trigger: Trigger::Above(80),
        message: "High technical complexity requires specialized expertise",
    },
    FactorRule {
        factor: QualificationFactor::MarketPotential,
        trigger: Trigger::Below(60),
        message: "Limited market potential may reduce long-term value",
    },
];

pub const OPPORTUNITY_RULES: &[FactorRule] = &[
    FactorRule {
        factor: QualificationFactor::Budget,
        trigger: Trigger::AtLeast(70),
        message: "Healthy budget allows for a comprehensive solution",
    },
    FactorRule {
        factor: QualificationFactor::Timeline,
        trigger: Trigger::AtLeast(70),
        message: "Realistic timeline supports quality delivery",
    },
    FactorRule {
        factor: QualificationFactor::BusinessImpact,
        trigger: Trigger::AtLeast(70),
        message: "Clear business impact supports a strong ROI case",
    },
    FactorRule {
        factor: QualificationFactor::MarketPotential,
        trigger: Trigger::AtLeast(80),
        message: "High-growth market creates follow-on opportunities",
    },
];

/// Fixed descriptions for a factor landing above the strength or below the concern threshold.
pub const fn strength_note(factor: QualificationFactor) -> &'static str {
    match factor {
        QualificationFactor::Budget => "Budget aligns well with project scope",
        QualificationFactor::Timeline => "Timeline allows for thorough planning and execution",
        QualificationFactor::TechnicalComplexity => {
            "Technically sophisticated project that showcases our expertise"
        }
        QualificationFactor::BusinessImpact => "Strong, measurable business impact",
        QualificationFactor::MarketPotential => "Project sits in a high-demand market",
    }
}

pub const fn concern_note(factor: QualificationFactor) -> &'static str {
    match factor {
        QualificationFactor::Budget => "Budget may be insufficient for the requested scope",
        QualificationFactor::Timeline => "Timeline is tight for the requested scope",
        QualificationFactor::TechnicalComplexity => {
            "Project offers limited technical differentiation"
        }
        QualificationFactor::BusinessImpact => "Business impact is not clearly defined",
        QualificationFactor::MarketPotential => "Market demand for this project type is limited",
    }
}

/// Ordered list of overall-score floors for each recommendation bucket; first match wins.
pub const PRIORITY_FLOORS: &[(u8, PriorityTier)] = &[
    (80, PriorityTier::HighPriority),
    (60, PriorityTier::Qualified),
    (40, PriorityTier::Potential),
];

/// Next-step playbooks selected on the overall score, independent of the priority tier.
pub const NEXT_STEP_FLOORS: &[(u8, &[&str])] = &[
    (
        70,
        &[
            "Schedule a discovery call within 24 hours",
            "Prepare a detailed technical proposal",
            "Assign a senior solution architect",
            "Share relevant case studies",
        ],
    ),
    (
        50,
        &[
            "Send a follow-up questionnaire to clarify requirements",
            "Schedule an initial consultation call",
            "Share portfolio examples for similar projects",
        ],
    ),
];

pub const FALLBACK_NEXT_STEPS: &[&str] = &[
    "Send an educational resources package",
    "Add to the nurture email sequence",
    "Re-engage when budget or timeline changes",
];

/// Recommendation bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    HighPriority,
    Qualified,
    Potential,
    LowPriority,
}

impl PriorityTier {
    pub const fn narrative(self) -> &'static str {
        match self {
            PriorityTier::HighPriority => {
                "High-priority lead: engage immediately with a senior team and a tailored proposal"
            }
            PriorityTier::Qualified => {
                "Qualified lead: schedule a technical discussion to refine scope and approach"
            }
            PriorityTier::Potential => {
                "Potential lead: gather more information before committing resources"
            }
            PriorityTier::LowPriority => {
                "Low-priority lead: assess strategic alignment before further engagement"
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PriorityTier::HighPriority => "high_priority",
            PriorityTier::Qualified => "qualified",
            PriorityTier::Potential => "potential",
            PriorityTier::LowPriority => "low_priority",
        }
    }
}

/// Relative contribution of each factor, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub budget: u8,
    pub timeline: u8,
    pub technical_complexity: u8,
    pub business_impact: u8,
    pub market_potential: u8,
}

impl ScoringWeights {
    pub const STANDARD: ScoringWeights = ScoringWeights {
        budget: 25,
        timeline: 20,
        technical_complexity: 25,
        business_impact: 20,
        market_potential: 10,
    };

    pub const fn weight_for(&self, factor: QualificationFactor) -> u8 {
        match factor {
            QualificationFactor::Budget => self.budget,
            QualificationFactor::Timeline => self.timeline,
            QualificationFactor::TechnicalComplexity => self.technical_complexity,
            QualificationFactor::BusinessImpact => self.business_impact,
            QualificationFactor::MarketPotential => self.market_potential,
        }
    }

    pub fn total(&self) -> u16 {
        QualificationFactor::ALL
            .iter()
            .map(|factor| u16::from(self.weight_for(*factor)))
            .sum()
    }

    /// Weights must add up to exactly 100% for the overall score to stay on the 0-100 scale.
    pub fn is_normalized(&self) -> bool {
        self.total() == 100
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Tunable part of the rubric: factor weights and the two global analysis breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationRubric {
    pub weights: ScoringWeights,
    /// Component scores at or above this are strengths and rate `High`.
    pub strength_threshold: u8,
    /// Component scores below this are concerns; at or above it rate at least `Medium`.
    pub concern_threshold: u8,
}

impl QualificationRubric {
    pub fn validated(self) -> Result<Self, RubricError> {
        if !self.weights.is_normalized() {
            return Err(RubricError::WeightsNotNormalized {
                total: self.weights.total(),
            });
        }
        if self.concern_threshold > self.strength_threshold || self.strength_threshold > 100 {
            return Err(RubricError::InvertedThresholds {
                strength: self.strength_threshold,
                concern: self.concern_threshold,
            });
        }
        Ok(self)
    }
}

impl Default for QualificationRubric {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::STANDARD,
            strength_threshold: 70,
            concern_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    #[error("factor weights must sum to 100%, got {total}%")]
    WeightsNotNormalized { total: u16 },
    #[error("strength threshold {strength} must be within 0-100 and not below concern threshold {concern}")]
    InvertedThresholds { strength: u8, concern: u8 },
}

pub(crate) fn lookup<T: PartialEq, V: Copy>(table: &[(T, V)], key: &T) -> Option<V> {
    table
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, value)| *value)
}

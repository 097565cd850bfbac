use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of values an intake form field may carry on the wire.
pub trait FormValue: Copy + PartialEq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn wire_name(self) -> &'static str;

    fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.wire_name() == raw)
    }
}

/// A form field that is either one of its declared values or whatever string the caller sent.
///
/// Unrecognized values are kept verbatim so they round-trip through storage and score as the
/// lowest branch of their factor instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormChoice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: FormValue> FormChoice<T> {
    pub fn from_wire(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match T::from_wire(&raw) {
            Some(value) => FormChoice::Known(value),
            None => FormChoice::Unrecognized(raw),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            FormChoice::Known(value) => Some(*value),
            FormChoice::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, FormChoice::Known(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            FormChoice::Known(value) => value.wire_name(),
            FormChoice::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl<T: FormValue> From<T> for FormChoice<T> {
    fn from(value: T) -> Self {
        FormChoice::Known(value)
    }
}

impl<T: FormValue> fmt::Display for FormChoice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: FormValue> Serialize for FormChoice<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: FormValue> Deserialize<'de> for FormChoice<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(FormChoice::from_wire(raw))
    }
}

/// Budget bracket selected on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BudgetRange {
    Under10k,
    From10kTo25k,
    From25kTo50k,
    From50kTo100k,
    Over100k,
}

impl FormValue for BudgetRange {
    const ALL: &'static [Self] = &[
        BudgetRange::Under10k,
        BudgetRange::From10kTo25k,
        BudgetRange::From25kTo50k,
        BudgetRange::From50kTo100k,
        BudgetRange::Over100k,
    ];

    fn wire_name(self) -> &'static str {
        match self {
            BudgetRange::Under10k => "under-10k",
            BudgetRange::From10kTo25k => "10k-25k",
            BudgetRange::From25kTo50k => "25k-50k",
            BudgetRange::From50kTo100k => "50k-100k",
            BudgetRange::Over100k => "100k+",
        }
    }
}

/// Delivery window the prospect asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Timeline {
    OneToTwoWeeks,
    OneMonth,
    TwoToThreeMonths,
    ThreeToSixMonths,
    SixMonthsPlus,
}

impl FormValue for Timeline {
    const ALL: &'static [Self] = &[
        Timeline::OneToTwoWeeks,
        Timeline::OneMonth,
        Timeline::TwoToThreeMonths,
        Timeline::ThreeToSixMonths,
        Timeline::SixMonthsPlus,
    ];

    fn wire_name(self) -> &'static str {
        match self {
            Timeline::OneToTwoWeeks => "1-2-weeks",
            Timeline::OneMonth => "1-month",
            Timeline::TwoToThreeMonths => "2-3-months",
            Timeline::ThreeToSixMonths => "3-6-months",
            Timeline::SixMonthsPlus => "6+months",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    AiIntegration,
    DataAnalytics,
    ApiDevelopment,
    WebApp,
    MobileApp,
    ECommerce,
    CustomSoftware,
    Other,
}

impl FormValue for ProjectType {
    const ALL: &'static [Self] = &[
        ProjectType::AiIntegration,
        ProjectType::DataAnalytics,
        ProjectType::ApiDevelopment,
        ProjectType::WebApp,
        ProjectType::MobileApp,
        ProjectType::ECommerce,
        ProjectType::CustomSoftware,
        ProjectType::Other,
    ];

    fn wire_name(self) -> &'static str {
        match self {
            ProjectType::AiIntegration => "ai-integration",
            ProjectType::DataAnalytics => "data-analytics",
            ProjectType::ApiDevelopment => "api-development",
            ProjectType::WebApp => "web-app",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::ECommerce => "e-commerce",
            ProjectType::CustomSoftware => "custom-software",
            ProjectType::Other => "other",
        }
    }
}

/// Project intake payload as produced by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeFormData {
    pub budget_range: FormChoice<BudgetRange>,
    pub timeline: FormChoice<Timeline>,
    pub project_type: FormChoice<ProjectType>,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub key_requirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_goals: Option<String>,
}

/// The five independent factors combined into the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationFactor {
    Budget,
    Timeline,
    TechnicalComplexity,
    BusinessImpact,
    MarketPotential,
}

impl QualificationFactor {
    pub const ALL: [QualificationFactor; 5] = [
        QualificationFactor::Budget,
        QualificationFactor::Timeline,
        QualificationFactor::TechnicalComplexity,
        QualificationFactor::BusinessImpact,
        QualificationFactor::MarketPotential,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            QualificationFactor::Budget => "budget",
            QualificationFactor::Timeline => "timeline",
            QualificationFactor::TechnicalComplexity => "technical complexity",
            QualificationFactor::BusinessImpact => "business impact",
            QualificationFactor::MarketPotential => "market potential",
        }
    }
}

//! Derived features consumed by the classifier

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user_input::Occupation;

/// Age bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Below 25
    Young,
    /// 25 to 44
    Adult,
    /// 45 to 59
    MiddleAged,
    /// 60 and above
    Senior,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Young => "young",
            AgeGroup::Adult => "adult",
            AgeGroup::MiddleAged => "middle_aged",
            AgeGroup::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk bucket combining smoking status and BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleRisk {
    Low,
    Medium,
    High,
}

impl LifestyleRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifestyleRisk::Low => "low",
            LifestyleRisk::Medium => "medium",
            LifestyleRisk::High => "high",
        }
    }
}

impl fmt::Display for LifestyleRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// City pricing tier, serialized as the bare integer 1, 2 or 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CityTier {
    Tier1,
    Tier2,
    Tier3,
}

impl CityTier {
    pub fn as_u8(&self) -> u8 {
        match self {
            CityTier::Tier1 => 1,
            CityTier::Tier2 => 2,
            CityTier::Tier3 => 3,
        }
    }
}

impl From<CityTier> for u8 {
    fn from(tier: CityTier) -> Self {
        tier.as_u8()
    }
}

impl TryFrom<u8> for CityTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CityTier::Tier1),
            2 => Ok(CityTier::Tier2),
            3 => Ok(CityTier::Tier3),
            other => Err(format!("city tier must be 1, 2 or 3, got {other}")),
        }
    }
}

impl fmt::Display for CityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Feature record derived from validated input.
///
/// `bmi` is weight (kg) over height (feet) squared, the quantity the
/// classifier was trained on. It is a model feature, not a clinical BMI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub bmi: f64,
    pub age_group: AgeGroup,
    pub life_style_risk: LifestyleRisk,
    pub city_tier: CityTier,
    pub income_lpa: f64,
    pub occupation: Occupation,
}

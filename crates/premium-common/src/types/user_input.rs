//! User input as submitted by callers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw user attributes, unvalidated.
///
/// `occupation` is kept as free text so an unknown value can be reported
/// as a field violation rather than a body parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUserInput {
    /// Age in years
    pub age: i64,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in feet
    pub height: f64,
    /// Annual income in lakhs per annum
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: String,
}

/// Closed set of occupations the classifier was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Retired,
    Freelancer,
    Student,
    GovernmentJob,
    BusinessOwner,
    Unemployed,
    PrivateJob,
}

impl Occupation {
    /// All occupations, in form display order
    pub const ALL: [Occupation; 7] = [
        Occupation::Retired,
        Occupation::Freelancer,
        Occupation::Student,
        Occupation::GovernmentJob,
        Occupation::BusinessOwner,
        Occupation::Unemployed,
        Occupation::PrivateJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Retired => "retired",
            Occupation::Freelancer => "freelancer",
            Occupation::Student => "student",
            Occupation::GovernmentJob => "government_job",
            Occupation::BusinessOwner => "business_owner",
            Occupation::Unemployed => "unemployed",
            Occupation::PrivateJob => "private_job",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown occupation '{0}'")]
pub struct ParseOccupationError(pub String);

impl FromStr for Occupation {
    type Err = ParseOccupationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occupation::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ParseOccupationError(s.to_string()))
    }
}

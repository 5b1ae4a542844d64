//! Daily calorie expenditure estimation
//!
//! A weight-only Harris-Benedict style basal rate scaled by an activity
//! coefficient:
//!
//! - Male: `88.362 + 13.397 × weight(kg)`
//! - Female: `447.593 + 9.247 × weight(kg)`
//!
//! The product is rounded to a whole number of kilocalories with ties going
//! to the even neighbour.

use crate::errors::{EstimateError, InputField};
use crate::validation::parse_weight_kg;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// Sex used to select the basal rate formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// All variants in the order the form presents them
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// English identifier
    pub fn name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    /// Literal used by the original form
    pub fn form_label(&self) -> &'static str {
        match self {
            Sex::Male => "Mies",
            Sex::Female => "Nainen",
        }
    }

    /// Basal rate in kcal/day for the given weight
    pub fn base_rate(&self, weight_kg: f64) -> f64 {
        match self {
            Sex::Male => 88.362 + 13.397 * weight_kg,
            Sex::Female => 447.593 + 9.247 * weight_kg,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sex {
    type Err = EstimateError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" | "Mies" => Ok(Sex::Male),
            "Female" | "Nainen" => Ok(Sex::Female),
            _ => Err(EstimateError::invalid(InputField::Sex)),
        }
    }
}

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Normal,
    Moderate,
    High,
    VeryHigh,
}

impl ActivityLevel {
    /// All levels in dropdown order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Low,
        ActivityLevel::Normal,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::VeryHigh,
    ];

    /// Multiplier applied to the basal rate
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.3,
            ActivityLevel::Normal => 1.5,
            ActivityLevel::Moderate => 1.7,
            ActivityLevel::High => 2.0,
            ActivityLevel::VeryHigh => 2.2,
        }
    }

    /// English identifier
    pub fn name(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Normal => "Normal",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
            ActivityLevel::VeryHigh => "VeryHigh",
        }
    }

    /// Literal used by the original form
    pub fn form_label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Matala",
            ActivityLevel::Normal => "Tavallinen",
            ActivityLevel::Moderate => "Keskitaso",
            ActivityLevel::High => "Korkea",
            ActivityLevel::VeryHigh => "Erittäin korkea",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityLevel {
    type Err = EstimateError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" | "Matala" => Ok(ActivityLevel::Low),
            "Normal" | "Tavallinen" => Ok(ActivityLevel::Normal),
            "Moderate" | "Keskitaso" => Ok(ActivityLevel::Moderate),
            "High" | "Korkea" => Ok(ActivityLevel::High),
            "VeryHigh" | "Erittäin korkea" => Ok(ActivityLevel::VeryHigh),
            _ => Err(EstimateError::invalid(InputField::Activity)),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Estimated daily expenditure in whole kilocalories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalorieEstimate(f64);

impl CalorieEstimate {
    pub fn kcal(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for CalorieEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

/// Estimate together with the values it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub weight_kg: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
    /// Basal rate before the activity coefficient
    pub base_rate: f64,
    pub factor: f64,
    pub estimate: CalorieEstimate,
}

// ============================================================================
// Calculation
// ============================================================================

/// Round to whole kilocalories, ties to even
///
/// A negative result that rounds to zero is reported as `0`, not `-0`.
pub fn round_kcal(value: f64) -> f64 {
    let rounded = value.round_ties_even();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Estimate from already typed inputs
pub fn calculate(weight_kg: f64, sex: Sex, activity: ActivityLevel) -> EstimateBreakdown {
    let base_rate = sex.base_rate(weight_kg);
    let factor = activity.factor();

    EstimateBreakdown {
        weight_kg,
        sex,
        activity,
        base_rate,
        factor,
        estimate: CalorieEstimate(round_kcal(base_rate * factor)),
    }
}

/// Estimate from raw form input, reporting which field was rejected
///
/// Inputs are checked in order weight, sex, activity; the first failure
/// wins and later fields are not looked at. A weight whose estimate
/// overflows `f64` is rejected like an unparsable one.
pub fn try_estimate(
    weight: &str,
    sex: &str,
    activity: &str,
) -> Result<EstimateBreakdown, EstimateError> {
    let weight_kg = parse_weight_kg(weight)?;
    let sex: Sex = sex.parse()?;
    let activity: ActivityLevel = activity.parse()?;

    let breakdown = calculate(weight_kg, sex, activity);
    if !breakdown.estimate.kcal().is_finite() {
        return Err(EstimateError::invalid(InputField::Weight));
    }
    Ok(breakdown)
}

/// Estimate from raw form input
///
/// Returns `None` when any input is invalid, without saying which one.
pub fn estimate(weight: &str, sex: &str, activity: &str) -> Option<CalorieEstimate> {
    try_estimate(weight, sex, activity)
        .ok()
        .map(|breakdown| breakdown.estimate)
}

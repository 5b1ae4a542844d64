//! API request and response types

use crate::errors::InputField;
use crate::estimator::{ActivityLevel, EstimateBreakdown, Sex};
use serde::{Deserialize, Serialize};

/// Estimate request
///
/// All fields are raw strings, validated by the estimator rather than by
/// deserialization, so a bad value yields an invalid-input error instead of
/// a malformed-body error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub weight: String,
    pub sex: String,
    pub activity: String,
}

/// Estimate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub kcal: f64,
    pub base_rate: f64,
    pub factor: f64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

impl From<EstimateBreakdown> for EstimateResponse {
    fn from(breakdown: EstimateBreakdown) -> Self {
        Self {
            kcal: breakdown.estimate.kcal(),
            base_rate: breakdown.base_rate,
            factor: breakdown.factor,
            weight_kg: breakdown.weight_kg,
            sex: breakdown.sex,
            activity: breakdown.activity,
        }
    }
}

/// One entry of the activity level listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLevelInfo {
    pub level: ActivityLevel,
    pub name: String,
    pub form_label: String,
    pub factor: f64,
}

impl From<ActivityLevel> for ActivityLevelInfo {
    fn from(level: ActivityLevel) -> Self {
        Self {
            level,
            name: level.name().to_string(),
            form_label: level.form_label().to_string(),
            factor: level.factor(),
        }
    }
}

/// All activity levels in dropdown order
pub fn activity_levels() -> Vec<ActivityLevelInfo> {
    ActivityLevel::ALL.into_iter().map(ActivityLevelInfo::from).collect()
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<InputField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::try_estimate;

    #[test]
    fn test_response_from_breakdown() {
        let response = EstimateResponse::from(try_estimate("60", "Nainen", "Korkea").unwrap());
        assert_eq!(response.kcal, 2005.0);
        assert_eq!(response.factor, 2.0);
        assert_eq!(response.sex, Sex::Female);
        assert_eq!(response.activity, ActivityLevel::High);
    }

    #[test]
    fn test_response_serialization() {
        let response = EstimateResponse::from(try_estimate("70", "Male", "VeryHigh").unwrap());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sex"], "male");
        assert_eq!(json["activity"], "very_high");
        assert_eq!(json["factor"], 2.2);
    }

    #[test]
    fn test_request_accepts_arbitrary_strings() {
        let req: EstimateRequest =
            serde_json::from_str(r#"{"weight":"","sex":"Other","activity":"x"}"#).unwrap();
        assert_eq!(req.weight, "");
        assert_eq!(req.sex, "Other");
    }

    #[test]
    fn test_activity_levels_order() {
        let levels = activity_levels();
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0].form_label, "Matala");
        assert_eq!(levels[4].name, "VeryHigh");
        assert!(levels.windows(2).all(|w| w[0].factor < w[1].factor));
    }

    #[test]
    fn test_error_detail_omits_missing_field() {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message: "bad".to_string(),
                field: None,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("field"));
    }
}

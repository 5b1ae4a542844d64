//! Calorie estimation API routes

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use calorie_estimator_shared::{
    activity_levels, try_estimate, ActivityLevelInfo, EstimateRequest, EstimateResponse,
};
use tracing::{debug, instrument};

/// Create estimation routes
pub fn estimate_routes() -> Router<AppState> {
    Router::new()
        .route("/estimate", post(create_estimate))
        .route("/activity-levels", get(list_activity_levels))
}

/// POST /api/v1/estimate - Estimate daily calorie expenditure
#[instrument(skip_all)]
async fn create_estimate(
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> ApiResult<Json<EstimateResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let breakdown = try_estimate(&req.weight, &req.sex, &req.activity)?;
    debug!(
        sex = %breakdown.sex,
        activity = %breakdown.activity,
        kcal = breakdown.estimate.kcal(),
        "Estimated calorie expenditure"
    );

    Ok(Json(EstimateResponse::from(breakdown)))
}

/// GET /api/v1/activity-levels - List activity levels and their coefficients
async fn list_activity_levels() -> Json<Vec<ActivityLevelInfo>> {
    Json(activity_levels())
}

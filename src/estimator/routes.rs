//! Route handlers for the estimator API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::AppState;

use super::calculators::compute_trip_cost;
use super::rates::RateTable;
use super::requests::EstimateRequest;
use super::responses::{CostBreakdownResponse, EstimateErrorResponse};

/// Estimator API router, mounted under `/api/estimator`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trip-cost", post(trip_cost))
        .route("/rates", get(rates))
}

/// Compute an itemized trip cost estimate.
async fn trip_cost(State(state): State<AppState>, Json(req): Json<EstimateRequest>) -> Response {
    let params = req.into_params();

    match compute_trip_cost(&params, &state.rates) {
        Ok(breakdown) => Json(CostBreakdownResponse::from_breakdown(
            breakdown,
            &params,
            &state.rates.currency,
        ))
        .into_response(),
        Err(err) => {
            tracing::warn!("estimate rejected: {}", err);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(EstimateErrorResponse {
                    error_type: err.error_type().to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Expose the active rate table so the planner's selectors and the
/// estimates it requests come from the same source of truth.
async fn rates(State(state): State<AppState>) -> Json<RateTable> {
    Json((*state.rates).clone())
}

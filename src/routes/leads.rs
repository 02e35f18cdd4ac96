//! Lead capture API handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::db;
use crate::models::NewLead;
use crate::AppState;

/// Response for a stored lead
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: Uuid,
    pub status: &'static str,
}

/// Lead error response
#[derive(Debug, Serialize)]
pub struct LeadErrorResponse {
    pub error_type: String,
    pub message: String,
}

/// Store an inquiry from the public site.
pub async fn create(State(state): State<AppState>, Json(lead): Json<NewLead>) -> Response {
    if let Err(msg) = lead.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(LeadErrorResponse {
                error_type: "invalid_lead".to_string(),
                message: msg.to_string(),
            }),
        )
            .into_response();
    }

    match db::insert_lead(&state.db, &lead).await {
        Ok(id) => {
            tracing::info!("New lead {} ({})", id, lead.source);
            (
                StatusCode::CREATED,
                Json(LeadResponse {
                    id,
                    status: "received",
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to store lead: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LeadErrorResponse {
                    error_type: "storage".to_string(),
                    message: "could not store the inquiry".to_string(),
                }),
            )
                .into_response()
        }
    }
}

//! Leads API endpoint
//!
//! - POST /api/leads - Insert a lead into the hosted table

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use super::client::{ErrorBody, LEADS_API_PATH};
use super::model::{LeadRecord, NewLead, ValidationError};
use super::postgrest::PostgrestStore;
use super::store::StoreError;

/// Leads API state containing the table client
#[derive(Clone)]
pub struct LeadsApiState {
    pub store: PostgrestStore,
}

/// Leads API error types
#[derive(Debug, thiserror::Error)]
pub enum LeadsApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for LeadsApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            LeadsApiError::BadRequest(_) | LeadsApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            LeadsApiError::Store(StoreError::Rejected { status, .. }) => {
                StatusCode::from_u16(*status)
                    .ok()
                    .filter(StatusCode::is_client_error)
                    .unwrap_or(StatusCode::BAD_GATEWAY)
            }
            LeadsApiError::Store(StoreError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            LeadsApiError::Store(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Create the leads API router
pub fn leads_api_router(state: LeadsApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(LEADS_API_PATH, post(create_lead_handler))
        .with_state(state)
}

/// POST /api/leads
/// Insert a lead and return the stored row
async fn create_lead_handler(
    State(state): State<Arc<LeadsApiState>>,
    payload: Result<Json<NewLead>, JsonRejection>,
) -> Result<(StatusCode, Json<LeadRecord>), LeadsApiError> {
    let Json(lead) = payload.map_err(|rejection| LeadsApiError::BadRequest(rejection.body_text()))?;
    let lead = lead.revalidate()?;

    tracing::info!("Lead submission for email: {}", lead.email());

    let record = state.store.insert(&lead).await.inspect_err(|e| {
        tracing::warn!("Lead insert failed for {}: {}", lead.email(), e);
    })?;

    tracing::info!(
        "Lead stored: id={}",
        record
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string())
    );

    Ok((StatusCode::CREATED, Json(record)))
}

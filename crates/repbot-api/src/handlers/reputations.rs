//! Reputation handlers
//!
//! Endpoints for the chat statistics dashboard.

use axum::extract::State;
use repbot_service::dto::ReputationResponse;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List every record, highest reputation first
///
/// GET /reputations
pub async fn list_reputations(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<ReputationResponse>>> {
    let records = state.ledger().list_by_reputation().await?;

    Ok(ApiJson(
        records.into_iter().map(ReputationResponse::from).collect(),
    ))
}

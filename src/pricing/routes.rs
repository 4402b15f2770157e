//! HTTP routes for the pricing API.
//!
//! Mounted under `/api/pricing`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::{PolicyResponse, PricingErrorResponse, QuoteResponse};
use super::services::PricingError;

/// Pricing API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote_from_query).post(quote_from_json))
        .route("/policy", get(policy))
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        tracing::info!("Rejected pricing request: {}", self);
        let body = PricingErrorResponse::from(&self);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// GET /api/pricing/quote?discipline=tech&pages=15&urgency=1m
async fn quote_from_query(
    State(state): State<AppState>,
    Query(request): Query<QuoteRequest>,
) -> Result<Json<QuoteResponse>, PricingError> {
    quote(&state, &request)
}

/// POST /api/pricing/quote
async fn quote_from_json(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, PricingError> {
    quote(&state, &request)
}

fn quote(state: &AppState, request: &QuoteRequest) -> Result<Json<QuoteResponse>, PricingError> {
    let quote = state.engine.quote(request)?;
    Ok(Json(QuoteResponse::from_quote(
        &quote,
        state.engine.policy(),
        &state.config.currency,
    )))
}

/// GET /api/pricing/policy
async fn policy(State(state): State<AppState>) -> Json<PolicyResponse> {
    Json(PolicyResponse::from_policy(
        state.engine.policy(),
        &state.config.currency,
    ))
}

//! Order action handler
//!
//! Builds the order summary for the current calculator input and tells the
//! browser what to do with it. Nothing is stored or processed server-side.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::order::{OrderAction, OrderSummary};
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::QuoteResponse;
use crate::pricing::PricingError;
use crate::AppState;

/// Response for POST /api/order
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub reference: Uuid,
    pub short_reference: String,
    pub channel: &'static str,
    pub message: String,
    pub action: OrderAction,
    pub quote: QuoteResponse,
}

/// POST /api/order
pub async fn prepare_order(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<OrderResponse>, PricingError> {
    let quote = state.engine.quote(&request)?;

    let summary = OrderSummary {
        brand_name: &state.config.brand_name,
        currency_symbol: &state.config.currency_symbol,
        reference: quote.reference,
        result: &quote.result,
    };
    let message = summary.render();
    let short_reference = summary.short_reference();
    let action = state.config.contact.order_action(&message);

    tracing::info!(
        reference = %short_reference,
        channel = state.config.contact.name(),
        final_price = quote.result.final_price,
        "Order request prepared"
    );

    Ok(Json(OrderResponse {
        reference: quote.reference,
        short_reference,
        channel: state.config.contact.name(),
        message,
        action,
        quote: QuoteResponse::from_quote(&quote, state.engine.policy(), &state.config.currency),
    }))
}

//! Contact QR code route

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::Result;
use crate::order::qr;
use crate::AppState;

/// PNG for the configured contact channel, rendered once and cached
pub async fn contact_qr_png(state: &AppState) -> Result<Arc<Vec<u8>>> {
    let payload = state.config.contact.qr_payload();

    if let Some(cached) = state.cache.qr_codes.get(&payload).await {
        tracing::debug!("Cache HIT for QR code");
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for QR code");
    let png = Arc::new(qr::render_png(&payload)?);
    state.cache.qr_codes.insert(payload, png.clone()).await;
    Ok(png)
}

/// GET /contact/qr.png
pub async fn qr_code(State(state): State<AppState>) -> Result<Response> {
    let png = contact_qr_png(&state).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        Vec::clone(&png),
    )
        .into_response())
}

//! Health check route

use axum::{extract::State, Json};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub pricing_policy: &'static str,
    pub contact_channel: &'static str,
    pub cache: CacheStats,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pricing_policy: state.engine.policy().preset.as_str(),
        contact_channel: state.config.contact.name(),
        cache: state.cache.stats(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::{app, AppState};

    #[tokio::test]
    async fn test_health() {
        let state = AppState::new(AppConfig::default());
        let response = app(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["pricing_policy"], "tiered-discount");
        assert_eq!(body["contact_channel"], "wechat");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let state = AppState::new(AppConfig::default());
        let response = app(state)
            .oneshot(Request::builder().uri("/essays/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

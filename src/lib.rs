//! Giant Writers landing page and pricing calculator.
//!
//! Server-rendered landing page with a live price calculator, a JSON pricing
//! API, and an order action that hands the quote off to a chat channel.

pub mod cache;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod order;
pub mod pricing;
pub mod routes;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use cache::AppCache;
use config::AppConfig;
use error::AppError;
use models::LandingContent;
use pricing::{PriceEngine, PricingPolicy};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub engine: PriceEngine,
    pub cache: AppCache,
    pub content: Arc<LandingContent>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let engine = PriceEngine::new(PricingPolicy::from_preset(config.pricing_policy));
        let content = LandingContent::for_brand(&config.brand_name);

        Self {
            config: Arc::new(config),
            engine,
            cache: AppCache::new(),
            content: Arc::new(content),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let api_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api = Router::new()
        .nest("/pricing", pricing::router())
        .route("/order", post(routes::order::prepare_order))
        .layer(api_cors);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(routes::landing::home))
        .route("/calculator", get(routes::landing::calculator_fragment))
        .route("/contact/qr.png", get(routes::contact::qr_code))
        .route("/health", get(routes::health::health))
        .nest("/api", api)
        .nest_service("/static", static_files)
        .fallback(|| async { AppError::NotFound })
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP handlers module
//!
//! This module wires the services into an axum router

pub mod health;
pub mod questions;

use std::sync::Arc;
use axum::{routing::get, Router};
use crate::config::Settings;
use crate::middleware;
use crate::services::ServiceFactory;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(services: ServiceFactory, settings: Settings) -> Self {
        Self {
            services: Arc::new(services),
            settings: Arc::new(settings),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/detailed", get(health::detailed_health_check))
        .nest("/questions", questions::routes());

    let mut router = Router::new()
        .nest(&state.settings.server.api_prefix, api)
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(axum::middleware::from_fn(middleware::assign_request_id));

    if let Some(cors) = middleware::cors_layer(&state.settings.server.allowed_origins) {
        router = router.layer(cors);
    }

    router.with_state(state)
}

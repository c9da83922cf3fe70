//! HTTP API Layer
//!
//! A thin axum transport over the authors and oppositions services. Each
//! handler calls exactly one service operation and writes its envelope back
//! with the envelope `code` as the HTTP status.
//!
//! # Architecture
//!
//! - **Handlers**: one per route, in `handlers`
//! - **DTOs**: request bodies and query strings, in `dto`
//! - **Middleware**: request id, tracing, request logging, CORS
//! - **Error Handling**: transport failures rendered as envelopes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Arc::new(author_adapter), Arc::new(opposition_adapter));
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_authors::{AuthorPort, AuthorsService};
use domain_oppositions::{OppositionPort, OppositionsService};

use crate::handlers::{authors, health, oppositions};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorsService,
    pub oppositions: OppositionsService,
    /// Adapters probed by the readiness endpoint
    pub health_checks: Vec<Arc<dyn HealthCheckable>>,
}

impl AppState {
    /// Wires both services to the given store adapters
    pub fn new<A, O>(authors: Arc<A>, oppositions: Arc<O>) -> Self
    where
        A: AuthorPort,
        O: OppositionPort,
    {
        let author_port: Arc<dyn AuthorPort> = authors.clone();
        let opposition_port: Arc<dyn OppositionPort> = oppositions.clone();
        let author_health: Arc<dyn HealthCheckable> = authors;
        let opposition_health: Arc<dyn HealthCheckable> = oppositions;
        Self {
            authors: AuthorsService::new(author_port.clone()),
            oppositions: OppositionsService::new(opposition_port, author_port),
            health_checks: vec![author_health, opposition_health],
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let author_routes = Router::new().route("/", post(authors::create_author));

    let opposition_routes = Router::new()
        .route(
            "/",
            post(oppositions::create_opposition).get(oppositions::list_oppositions),
        )
        .route(
            "/:id",
            get(oppositions::get_opposition)
                .put(oppositions::update_opposition)
                .delete(oppositions::delete_opposition),
        )
        .route("/:id/phrases", get(oppositions::get_opposition_phrases));

    let api_routes = Router::new()
        .nest("/authors", author_routes)
        .nest("/oppositions", opposition_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

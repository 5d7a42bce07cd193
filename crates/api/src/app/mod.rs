//! HTTP API application wiring (Axum router + layers).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs that only exist at the HTTP boundary
//! - `extract.rs`: extractors that parse and validate request parts
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, extract::DefaultBodyLimit};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use roster_people::PersonDirectory;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(config.max_upload_bytes))
            .layer(Extension(PersonDirectory::new())),
    )
}

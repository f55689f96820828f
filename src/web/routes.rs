//! Route registration for the calculator endpoints.

use axum::{Extension, Router, routing::post};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::calculator::SharedCalculator;

/// Builds the application router around one shared calculator.
///
/// The calculator is stateless, so a single instance serves every request.
pub fn router(calculator: SharedCalculator) -> Router {
    Router::new()
        .route("/add", post(handlers::handle_add))
        .route("/subtract", post(handlers::handle_subtract))
        .route("/multiply", post(handlers::handle_multiply))
        .layer(Extension(calculator))
        .layer(TraceLayer::new_for_http())
}

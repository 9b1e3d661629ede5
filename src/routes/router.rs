/**
 * Router Configuration
 *
 * This module provides the main router creation function that assembles
 * the route table, request tracing, and the fallback handler into a single
 * Axum router.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (account store, token keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// - `POST /api/auth/signup` - account registration
/// - `POST /api/auth/login` - account login
/// - `GET /api/auth/me` - current account (bearer token required)
///
/// Unknown routes fall through to a plain 404. Every request is traced via
/// `TraceLayer`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Request tracing
    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}

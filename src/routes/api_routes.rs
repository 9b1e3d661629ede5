/**
 * API Route Handlers
 *
 * This module defines the route table for the API endpoints.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - account registration
 * - `POST /api/auth/login` - account login
 * - `GET /api/auth/me` - get current account info
 */

use axum::Router;

use crate::auth::{get_me, login, signup};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// - `/api/auth/signup` - public (creates a new account)
/// - `/api/auth/login` - public (returns a bearer token)
/// - `/api/auth/me` - requires a bearer token in the `Authorization`
///   header (enforced by the `AuthUser` extractor)
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/me", axum::routing::get(get_me))
}

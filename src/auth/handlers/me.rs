/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the account of the currently authenticated caller.
 *
 * # Authentication
 *
 * The route requires a valid bearer token; the `AuthUser` extractor
 * verifies it and hands the handler the token's subject. The handler then
 * resolves the subject against the store - a valid token whose account has
 * since been deleted is rejected like any other unauthorized request.
 */

use axum::{extract::State, response::Json};

use crate::auth::accounts::current_user;
use crate::auth::handlers::types::UserResponse;
use crate::error::AuthError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Arguments
///
/// * `State(state)` - Application state (store)
/// * `AuthUser(account_id)` - Subject of the verified bearer token
///
/// # Errors
///
/// * `401 Unauthorized` - missing/invalid/expired token (extractor) or a
///   subject that no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
) -> Result<Json<UserResponse>, AuthError> {
    let account = current_user(state.store.as_ref(), account_id).await?;
    Ok(Json(account.into()))
}

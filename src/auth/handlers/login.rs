/**
 * Login Handler
 *
 * This module implements the authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Deserialize and validate the request body
 * 2. Verify the credentials against the stored hash
 * 3. Issue a session token
 * 4. Return the account and token
 *
 * # Security
 *
 * - Unknown email and wrong password are indistinguishable: both answer
 *   401 with the same fixed message, so accounts cannot be enumerated
 * - Password verification is constant-time-equivalent (bcrypt)
 * - Responses never contain a password field
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::auth::accounts::authenticate;
use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the presented email and password and returns a session token
/// when they match a stored credential.
///
/// # Arguments
///
/// * `State(state)` - Application state (store, token keys)
/// * `payload` - Login request body, or the rejection axum produced for it
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing/empty fields
/// * `401 Unauthorized` - wrong password or unknown email
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AuthError> {
    let Json(request) = payload.map_err(|_| AuthError::Validation)?;
    request.validate()?;

    let account = authenticate(state.store.as_ref(), &request.email, &request.password).await?;

    let token = state.token_keys.issue(account.id)?;

    tracing::info!("account logged in: {}", account.email);

    Ok(Json(AuthResponse {
        user: account.into(),
        token,
    }))
}

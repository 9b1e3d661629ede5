/**
 * Signup Handler
 *
 * This module implements the account registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Deserialize and validate the request body
 * 2. Hash the password and create the account
 * 3. Issue a session token for the new account
 * 4. Return 201 with the account and token
 *
 * # Security
 *
 * - The plaintext password is hashed before it reaches the store
 * - Responses never contain a password field
 * - Duplicate emails answer the same 422 body as any other invalid data
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::accounts::create_account;
use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Sign up handler
///
/// Registers a new account and returns a session token for immediate
/// authentication.
///
/// # Arguments
///
/// * `State(state)` - Application state (store, token keys)
/// * `payload` - Signup request body, or the rejection axum produced for it
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing/empty fields or duplicate email
/// * `500 Internal Server Error` - store, hashing, or signing failure
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    // A body that does not deserialize is the same failure as one with
    // empty fields.
    let Json(request) = payload.map_err(|_| AuthError::Validation)?;
    request.validate()?;

    let account = create_account(
        state.store.as_ref(),
        request.name,
        request.email,
        &request.password,
    )
    .await?;

    let token = state.token_keys.issue(account.id)?;

    tracing::info!("account created: {}", account.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: account.into(),
            token,
        }),
    ))
}

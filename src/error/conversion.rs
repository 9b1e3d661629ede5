/**
 * Error Conversion
 *
 * This module converts authentication errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single field:
 * ```json
 * {
 *   "message": "Email or Password is incorrect."
 * }
 * ```
 *
 * # Fixed Messages
 *
 * The message is fixed per error class, not per error instance. Wrong
 * password and unknown email share one message, and every token-rejection
 * case shares another, so the response body never reveals which check
 * failed. Internal errors are logged with their detail and answered with an
 * opaque message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::AuthError;

/// User-facing message for an error
///
/// Collapses the taxonomy into the three fixed messages the API exposes,
/// plus an opaque message for internal failures.
fn user_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::Validation | AuthError::InvalidCredential | AuthError::DuplicateAccount => {
            "The given data was invalid"
        }
        AuthError::AuthenticationFailed => "Email or Password is incorrect.",
        AuthError::InvalidToken | AuthError::UnknownSubject => "Unauthorized.",
        AuthError::Store(_) | AuthError::Hash(_) | AuthError::Token(_) => "Internal server error",
    }
}

impl IntoResponse for AuthError {
    /// Convert an authentication error into an HTTP response
    ///
    /// Internal failures are logged here, at the single point where they
    /// leave the application, with their full detail; the response body
    /// only ever carries the fixed message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = user_message(&self);

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error answering request: {self}");
        } else {
            tracing::debug!("request rejected ({status}): {self}");
        }

        let body = serde_json::json!({
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_message_is_fixed() {
        assert_eq!(
            user_message(&AuthError::AuthenticationFailed),
            "Email or Password is incorrect."
        );
    }

    #[test]
    fn test_token_rejections_share_one_message() {
        assert_eq!(user_message(&AuthError::InvalidToken), "Unauthorized.");
        assert_eq!(user_message(&AuthError::UnknownSubject), "Unauthorized.");
    }

    #[test]
    fn test_invalid_data_message_covers_validation_and_duplicates() {
        assert_eq!(
            user_message(&AuthError::Validation),
            "The given data was invalid"
        );
        assert_eq!(
            user_message(&AuthError::DuplicateAccount),
            "The given data was invalid"
        );
    }
}

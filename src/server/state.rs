/**
 * Application State Management
 *
 * This module defines the application state shared by all request
 * handlers.
 *
 * # Thread Safety
 *
 * Both fields are read-only after startup and shared via `Arc`, so
 * `AppState` clones cheaply per request and needs no locking:
 * - the store serializes its own access (connection pool / internal lock)
 * - the token keys are immutable
 */

use std::sync::Arc;

use crate::auth::store::UserStore;
use crate::auth::tokens::TokenKeys;

/// Application state for the Axum router
///
/// Holds the two collaborators the handlers need: the account store and
/// the session token keys. Constructed once in `server::init::create_app`
/// (production) or directly by tests with an in-memory store.
#[derive(Clone)]
pub struct AppState {
    /// Account persistence backend
    pub store: Arc<dyn UserStore>,

    /// Session token signing/verification keys
    ///
    /// Built once at startup from configuration; never mutated.
    pub token_keys: Arc<TokenKeys>,
}

/**
 * Server Initialization
 *
 * This module wires the application together at startup: database pool,
 * account store, token keys, application state, and router.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool and run migrations
 * 2. Build the account store over the pool
 * 3. Build the token keys from the configured secret
 * 4. Assemble `AppState` and the router
 *
 * Configuration problems (missing `DATABASE_URL`/`JWT_SECRET`) have
 * already been rejected by `ServerConfig::from_env` before this runs.
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::store::{PgUserStore, UserStore};
use crate::auth::tokens::TokenKeys;
use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Startup configuration loaded from the environment
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Database connection failure. Everything after the pool is infallible
/// assembly.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing gatehouse server");

    // Step 1: Database pool and migrations
    let pool = load_database(&config.database_url).await?;

    // Step 2: Account store over the pool
    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));

    // Step 3: Token keys, built once from configuration
    let token_keys = Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs));

    // Step 4: App state and router
    let app_state = AppState { store, token_keys };
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}

/**
 * Server Configuration
 *
 * This module loads and validates server configuration from the
 * environment, once, at startup.
 *
 * # Configuration Sources
 *
 * Environment variables (a `.env` file is honored via dotenv in `main`):
 *
 * - `DATABASE_URL` - required; PostgreSQL connection string
 * - `JWT_SECRET` - required; HS256 signing key. There is deliberately no
 *   fallback value: a secret must never be embedded in code.
 * - `SERVER_PORT` - optional; defaults to 3000
 * - `TOKEN_TTL_SECS` - optional; defaults to 30 days
 *
 * # Error Handling
 *
 * A missing required variable is a startup error. After startup, nothing
 * re-reads the environment.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default session token lifetime: 30 days
const DEFAULT_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Default listen port
const DEFAULT_PORT: u16 = 3000;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {0} has an invalid value")]
    InvalidVar(&'static str),
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// HS256 signing key for session tokens
    pub jwt_secret: String,
    /// Session token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingVar` - `DATABASE_URL` or `JWT_SECRET` unset
    /// * `ConfigError::InvalidVar` - unparsable port or TTL
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("SERVER_PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidVar("TOKEN_TTL_SECS"))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            token_ttl_secs,
        })
    }
}

/// Connect to the database and run migrations
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Returns
///
/// The connection pool. A migration failure is logged but does not abort
/// startup - the migrations may already have been applied out-of-band.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["DATABASE_URL", "JWT_SECRET", "SERVER_PORT", "TOKEN_TTL_SECS"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_jwt_secret_is_an_error() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/auth");

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingVar("JWT_SECRET"))));
    }

    #[test]
    #[serial]
    fn test_defaults_apply_when_optional_vars_unset() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/auth");
        std::env::set_var("JWT_SECRET", "secret");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.token_ttl_secs, 30 * 24 * 60 * 60);
    }

    #[test]
    #[serial]
    fn test_explicit_values_override_defaults() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/auth");
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("SERVER_PORT", "8080");
        std::env::set_var("TOKEN_TTL_SECS", "3600");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.token_ttl_secs, 3600);
    }

    #[test]
    #[serial]
    fn test_unparsable_port_is_an_error() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/auth");
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("SERVER_PORT", "not-a-port");

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidVar("SERVER_PORT"))));
    }
}

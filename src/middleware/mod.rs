//! Middleware Module
//!
//! Request-processing middleware for the server. Currently this is the
//! authentication extractor that gates protected routes on a valid bearer
//! token.

/// Bearer-token authentication extractor
pub mod auth;

pub use auth::AuthUser;

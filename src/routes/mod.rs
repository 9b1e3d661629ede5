//! Route Configuration Module
//!
//! This module configures the HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation
//! └── api_routes.rs  - API endpoint route table
//! ```
//!
//! # Routes
//!
//! - `POST /api/auth/signup` - account registration
//! - `POST /api/auth/login` - account login
//! - `GET /api/auth/me` - current account info (bearer token required)
//!
//! Anything else answers 404.

/// Main router creation
pub mod router;

/// API endpoint route table
pub mod api_routes;

pub use router::create_router;

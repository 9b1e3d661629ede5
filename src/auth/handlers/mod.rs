//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication
//! endpoints, one focused submodule per endpoint.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Account registration handler
//! ├── login.rs    - Authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - account registration
//! - **`login`** - POST /api/auth/login - credential verification
//! - **`get_me`** - GET /api/auth/me - current account info
//!
//! Handlers are thin: they deserialize and validate, call into
//! `auth::accounts`, and let `AuthError`'s `IntoResponse` conversion pick
//! the status code and fixed message.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use signup::signup;

//! Server Module
//!
//! This module contains the code that initializes and configures the HTTP
//! server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState shared by all handlers
//! ├── config.rs - Startup configuration and database loading
//! └── init.rs   - Application assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env` reads the environment
//!    once; missing required variables abort startup
//! 2. **Database**: pool creation and embedded migrations
//! 3. **Assembly**: store + token keys into `AppState`, then the router

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;

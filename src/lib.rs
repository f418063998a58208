//! # Shortlink
//!
//! A small URL shortening service built with Axum. Long URLs are mapped to
//! 6-character alphanumeric codes held in a single-process, in-memory store.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - Link entities and the repository trait
//! - **Application Layer** ([`application`]) - Code allocation and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - The concurrent in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional
//! export BASE_URL="http://localhost:5000"
//! export ALLOWED_ORIGIN="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Limitations
//!
//! The store lives and dies with the process: nothing is persisted, and the
//! mapping is not shared between instances. Code allocation retries on
//! collision without bound, so a store approaching the full 62^6 code space
//! would make `create` spin indefinitely. Both are intentional for the
//! current scope.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::MemoryLinkRepository;
    pub use crate::state::AppState;
}

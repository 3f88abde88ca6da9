//! Askboard - Main Library
//!
//! Askboard is a minimal discussion-forum backend: user signup/login,
//! question CRUD and threaded replies, persisted as JSON documents and
//! served over HTTP with Axum.
//!
//! # Module Structure
//!
//! - **`store`** - Document store adapter (JSON collections over SQLite)
//! - **`entities`** - User, Question and Reply record shapes
//! - **`credentials`** - Password hashing and verification
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`handlers`** - Resource handlers, one per route
//! - **`routes`** - Router wiring handlers to verb + path
//! - **`server`** - Configuration, shared state and app construction
//!
//! # Usage
//!
//! ```rust,no_run
//! use askboard::server::init::create_app;
//! use askboard::store::Store;
//!
//! # async fn example() -> Result<(), askboard::store::StoreError> {
//! let store = Store::connect("sqlite:askboard.db?mode=rwc").await?;
//! let app = create_app(store);
//! // Serve app with Axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`; every failure is serialized as a
//! JSON body with a human-readable `message` and an HTTP status from the
//! error taxonomy (400 validation/conflict/auth, 404 not found, 500
//! internal). See the `error` module.

/// Password hashing and verification
pub mod credentials;

/// Entity record shapes
pub mod entities;

/// API error taxonomy
pub mod error;

/// HTTP resource handlers
pub mod handlers;

/// Router configuration
pub mod routes;

/// Server configuration, state and bootstrap
pub mod server;

/// Document store adapter
pub mod store;

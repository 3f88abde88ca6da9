//! API Error Module
//!
//! Defines the error taxonomy used by the resource handlers and its
//! conversion to HTTP responses.
//!
//! # Taxonomy
//!
//! - `Validation` - missing/empty required field (400)
//! - `Conflict` - duplicate unique key (400)
//! - `NotFound` - unresolved identifier (404)
//! - `Auth` - bad credentials, deliberately generic message (400)
//! - `Internal` - store or hash failure (500)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements Axum's `IntoResponse`, so handlers can return it
//! directly. Every failure body is JSON with a human-readable `message`
//! field and no structured error codes beyond the HTTP status.

/// Error conversion implementations
pub mod conversion;

/// Error type definitions
pub mod types;

pub use types::ApiError;

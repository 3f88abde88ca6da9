//! Resource Handlers
//!
//! One stateless handler per HTTP route. Each handler validates the
//! request body against an explicit schema struct, issues at most one
//! check-then-write sequence against the document store, and serializes
//! either a success payload or an `ApiError`.

/// Server-rendered page stubs
pub mod pages;

/// Question CRUD handlers
pub mod questions;

/// Reply handlers
pub mod replies;

/// Request and response schemas
pub mod types;

/// Signup and login handlers
pub mod users;

//! Server Module
//!
//! Configuration loading, shared application state and app construction.

/// Environment-backed configuration
pub mod config;

/// App construction
pub mod init;

/// Shared application state
pub mod state;

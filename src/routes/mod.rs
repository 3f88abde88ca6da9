//! Router Module
//!
//! Wires every resource handler and page stub to its verb + path.

/// Router construction
pub mod router;

pub use router::create_router;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound mail.
//!
//! # Modules
//!
//! - [`mail`] - Mail delivery abstraction (tracing-backed implementation)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod mail;
pub mod persistence;

//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the API or infrastructure layers;
//! repository traits defined here are implemented by
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;

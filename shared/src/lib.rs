//! Shared types and models for the Cafeteria Management Dashboard
//!
//! This crate contains the entity records, draft input types, validation
//! rules and money helpers shared between the backend and any other
//! components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

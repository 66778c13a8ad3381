//! Shared domain types for the Hydro Habitat services.
//!
//! Holds the primitives every other crate agrees on: identifier and
//! timestamp aliases, the domain error type, the tank water enum, and the
//! helpers used to validate and normalize incoming DTOs.

pub mod error;
pub mod serde_ext;
pub mod types;
pub mod validation;
pub mod water;

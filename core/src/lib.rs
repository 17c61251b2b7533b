//! Campus Core Types
//!
//! This crate provides the foundational types used throughout the campus
//! system:
//! - Identity types, one opaque id per entity kind
//! - The `PersonId` union for polymorphic person handling
//! - The shared person capability record (name, gender, date of birth)
//! - Store-level error types

mod error;
mod id;
mod person;

pub use error::*;
pub use id::*;
pub use person::*;

//! Domain layer for the inventory backend.
//!
//! Holds the shared id type, the closed error taxonomy, and the per-field
//! product validation engine. This crate has no database or HTTP
//! dependencies so the validation logic stays unit-testable in isolation.

pub mod error;
pub mod types;
pub mod validation;

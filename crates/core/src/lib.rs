//! `roster-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the field validation toolkit shared by every record.

pub mod error;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use validation::{FieldError, Report, Validate};

//! Repository traits for the domain layer
//!
//! Contains:
//! - `StudentRepository` — persistence boundary for the student aggregate
//! - `DomainResult` — standard result type for domain operations

pub use super::student::StudentRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

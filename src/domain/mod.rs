//! Domain layer
//!
//! Student entity and the repository contract it is stored through.

pub mod repositories;
pub mod student;

pub use repositories::DomainResult;
pub use student::{Student, StudentRepository};

pub use crate::shared::errors::{DomainError, InvalidArgument};

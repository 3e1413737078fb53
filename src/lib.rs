//! # Student Service
//!
//! Validation and orchestration for student records on top of an
//! injected repository.
//!
//! ## Architecture
//!
//! - **domain**: Student entity, repository trait, result type
//! - **application**: `StudentService` use-cases
//! - **infrastructure**: in-memory repository
//! - **shared**: error types

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use application::StudentService;
pub use config::{default_config_path, AppConfig, ConfigError, LoggingConfig};
pub use domain::{DomainError, DomainResult, InvalidArgument, Student, StudentRepository};
pub use infrastructure::InMemoryStudentRepository;
pub use logging::init_tracing;

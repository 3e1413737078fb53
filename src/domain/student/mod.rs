//! Student aggregate
//!
//! Contains the Student entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::Student;
pub use repository::StudentRepository;

//! Student repository interface

use super::Student;
use crate::domain::DomainResult;

/// Persistence boundary for students.
///
/// Implementations own their own synchronization; callers share them
/// behind an `Arc` without locking.
pub trait StudentRepository: Send + Sync {
    fn add(&self, student: Student) -> DomainResult<()>;
    fn update(&self, student: Student) -> DomainResult<()>;
    fn delete(&self, student: Student) -> DomainResult<()>;
    fn get(&self, id: i32) -> DomainResult<Option<Student>>;
    fn get_all(&self) -> DomainResult<Vec<Student>>;
}

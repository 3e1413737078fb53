//! Student service — validation and orchestration of student use-cases
//!
//! Writes are checked against the student invariants before they reach
//! the repository. Reads are passed through untouched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainError, DomainResult, InvalidArgument, Student, StudentRepository};

/// Student service.
///
/// Generic over `R: StudentRepository` so it stays decoupled from the
/// concrete persistence layer. `R` may be unsized, which allows
/// `StudentService<dyn StudentRepository>`.
pub struct StudentService<R: StudentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StudentRepository + ?Sized> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Build a service from a repository that may not have been supplied.
    pub fn try_new(repo: Option<Arc<R>>) -> DomainResult<Self> {
        repo.map(Self::new)
            .ok_or(DomainError::MissingArgument("repository"))
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub fn add_student(&self, student: Option<Student>) -> DomainResult<()> {
        let student = student.ok_or(DomainError::MissingArgument("student"))?;
        ensure_valid(&student)?;

        let id = student.id();
        self.repo.add(student)?;
        info!(student_id = id, "Student added");
        Ok(())
    }

    pub fn update_student(&self, student: Option<Student>) -> DomainResult<()> {
        let student = student.ok_or(DomainError::MissingArgument("student"))?;
        ensure_valid(&student)?;

        let id = student.id();
        self.repo.update(student)?;
        info!(student_id = id, "Student updated");
        Ok(())
    }

    /// Delete a student that the repository currently knows about.
    ///
    /// Only the id is looked up; the other fields are forwarded as given.
    pub fn delete_student(&self, student: Option<Student>) -> DomainResult<()> {
        let student = student.ok_or(DomainError::MissingArgument("student"))?;

        let id = student.id();
        if self.repo.get(id)?.is_none() {
            debug!(student_id = id, "Delete rejected: student does not exist");
            return Err(InvalidArgument::StudentDoesNotExist.into());
        }

        self.repo.delete(student)?;
        info!(student_id = id, "Student deleted");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn get_student(&self, id: i32) -> DomainResult<Option<Student>> {
        self.repo.get(id)
    }

    pub fn get_all_students(&self) -> DomainResult<Vec<Student>> {
        self.repo.get_all()
    }
}

impl<R: StudentRepository + ?Sized> Clone for StudentService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────

/// Check the write invariants in order; the first violation wins.
fn ensure_valid(student: &Student) -> Result<(), InvalidArgument> {
    let result = if student.id() <= 0 {
        Err(InvalidArgument::IdNotPositive)
    } else {
        match (student.name(), student.email()) {
            (None, _) => Err(InvalidArgument::NameMissing),
            (Some(""), _) => Err(InvalidArgument::NameEmpty),
            (_, Some("")) => Err(InvalidArgument::EmailEmpty),
            _ => Ok(()),
        }
    };

    if let Err(reason) = &result {
        debug!(student_id = student.id(), %reason, "Student rejected");
    }
    result
}

//! In-memory student repository

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, Student, StudentRepository};

/// In-memory storage for development and testing
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: DashMap<i32, Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn not_found(id: i32) -> DomainError {
        DomainError::NotFound {
            entity: "Student",
            field: "id",
            value: id.to_string(),
        }
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&self, student: Student) -> DomainResult<()> {
        match self.students.entry(student.id()) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!("Student {}", student.id()))),
            Entry::Vacant(slot) => {
                slot.insert(student);
                Ok(())
            }
        }
    }

    fn update(&self, student: Student) -> DomainResult<()> {
        // Replaced under the shard lock so a concurrent delete cannot be undone.
        let mut stored = self
            .students
            .get_mut(&student.id())
            .ok_or_else(|| Self::not_found(student.id()))?;
        *stored = student;
        Ok(())
    }

    fn delete(&self, student: Student) -> DomainResult<()> {
        self.students
            .remove(&student.id())
            .ok_or_else(|| Self::not_found(student.id()))?;
        Ok(())
    }

    fn get(&self, id: i32) -> DomainResult<Option<Student>> {
        Ok(self.students.get(&id).map(|s| s.clone()))
    }

    fn get_all(&self) -> DomainResult<Vec<Student>> {
        let mut all: Vec<Student> = self.students.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(Student::id);
        Ok(all)
    }
}

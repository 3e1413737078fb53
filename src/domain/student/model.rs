//! Student domain entity

use std::fmt;

use serde::{Deserialize, Serialize};

/// A student record.
///
/// The type does not enforce any invariant: a `Student` may carry a
/// non-positive id, a missing name or an empty email. Those are rejected
/// by `StudentService` before anything reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: i32,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl Student {
    /// Named student without an email.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: None,
        }
    }

    pub fn from_parts(id: i32, name: Option<String>, email: Option<String>) -> Self {
        Self { id, name, email }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name().unwrap_or("<unnamed>"))?;
        if let Some(email) = self.email() {
            write!(f, " <{}>", email)?;
        }
        Ok(())
    }
}

use thiserror::Error;

/// Reasons a present argument is rejected by the student service.
///
/// The `Display` output is the exact message reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("Invalid Id. Id must be greater than zero")]
    IdNotPositive,

    #[error("Invalid name. Name is missing")]
    NameMissing,

    #[error("Invalid name. Name is empty")]
    NameEmpty,

    #[error("Invalid email. Email is empty")]
    EmailEmpty,

    #[error("Student does not exist")]
    StudentDoesNotExist,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Value cannot be null (parameter '{0}')")]
    MissingArgument(&'static str),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: {0}")]
    Conflict(String),

    /// Backing-store failure reported by an external repository
    /// implementation (I/O, lost connection). Nothing in this crate
    /// produces it; the service passes it through unchanged.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// The validation failure carried by this error, if any.
    pub fn invalid_argument(&self) -> Option<&InvalidArgument> {
        match self {
            DomainError::InvalidArgument(reason) => Some(reason),
            _ => None,
        }
    }
}

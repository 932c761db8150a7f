pub mod airline;
pub mod auth;
pub mod connector;
pub mod customer;
pub mod employee;
pub mod records;
pub mod registration;
pub mod repository;
pub mod staff;
pub mod token;

use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Validation failed for {} field(s)", .0.len())]
    FieldErrors(BTreeMap<String, String>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("{service} responded with {status}: {message}")]
    UpstreamError {
        service: String,
        status: u16,
        message: String,
    },
    #[error("{0} is unavailable")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

impl CoreError {
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        CoreError::NotFound(format!("{} not found with id: {}", capitalize(kind), id))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CoreError::not_found("employee", 42);
        assert_eq!(err.to_string(), "Employee not found with id: 42");
    }
}

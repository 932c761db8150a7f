use skywings_core::CoreError;
use sqlx::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("corrupt {kind} row: {message}")]
    Corrupt { kind: &'static str, message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        if let StoreError::Database(sqlx::Error::Database(db)) = &err {
            if let Some(conflict) = constraint_conflict(db.kind(), db.constraint()) {
                return conflict;
            }
        }
        CoreError::StorageError(err.to_string())
    }
}

/// Foreign-key and unique violations are the caller's problem (409).
fn constraint_conflict(kind: ErrorKind, constraint: Option<&str>) -> Option<CoreError> {
    match kind {
        ErrorKind::ForeignKeyViolation => Some(CoreError::Conflict(format!(
            "record is still referenced: {}",
            constraint.unwrap_or("foreign key")
        ))),
        ErrorKind::UniqueViolation => Some(CoreError::Conflict(format!(
            "duplicate value violates {}",
            constraint.unwrap_or("unique constraint")
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_key_violation_is_conflict() {
        let err = constraint_conflict(ErrorKind::ForeignKeyViolation, Some("fk_bookings_payment"));
        match err {
            Some(CoreError::Conflict(msg)) => assert!(msg.contains("fk_bookings_payment")),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_unique_violation_is_conflict() {
        let err = constraint_conflict(ErrorKind::UniqueViolation, None);
        match err {
            Some(CoreError::Conflict(msg)) => assert_eq!(msg, "duplicate value violates unique constraint"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_other_failures_are_storage_errors() {
        assert!(constraint_conflict(ErrorKind::NotNullViolation, Some("customers_email")).is_none());
        assert!(constraint_conflict(ErrorKind::CheckViolation, None).is_none());

        let err: CoreError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, CoreError::StorageError(_)));

        let err: CoreError = StoreError::Corrupt {
            kind: "payment",
            message: "bad status".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::StorageError(_)));
    }
}

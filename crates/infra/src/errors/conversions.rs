//! Conversions from external infrastructure errors into domain errors.

use familylegacy_common::storage::StorageError;
use familylegacy_domain::PlatformError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PlatformError);

impl From<InfraError> for PlatformError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PlatformError> for InfraError {
    fn from(value: PlatformError) -> Self {
        InfraError(value)
    }
}

trait IntoPlatformError {
    fn into_platform(self) -> PlatformError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → PlatformError */
/* -------------------------------------------------------------------------- */

impl IntoPlatformError for SqlError {
    fn into_platform(self) -> PlatformError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        PlatformError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        PlatformError::Database("database is locked".into())
                    }
                    // SQLITE_CONSTRAINT_UNIQUE
                    (ErrorCode::ConstraintViolation, 2067) => {
                        PlatformError::Conflict("unique constraint violation".into())
                    }
                    // SQLITE_CONSTRAINT_FOREIGNKEY
                    (ErrorCode::ConstraintViolation, 787) => {
                        PlatformError::Database("foreign key constraint violation".into())
                    }
                    _ => PlatformError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => PlatformError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                PlatformError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                PlatformError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidQuery => PlatformError::Database("invalid SQL query".into()),
            other => PlatformError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_platform())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → PlatformError */
/* -------------------------------------------------------------------------- */

impl IntoPlatformError for StorageError {
    fn into_platform(self) -> PlatformError {
        match self {
            StorageError::Rusqlite(err) => err.into_platform(),
            StorageError::Timeout(secs) => {
                PlatformError::Database(format!("connection pool timed out after {secs}s"))
            }
            StorageError::Migration(msg) => {
                PlatformError::Database(format!("Migration error: {msg}"))
            }
            StorageError::InvalidConfig(msg) => PlatformError::Config(msg),
            other => PlatformError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_platform())
    }
}

pub fn map_storage_error(err: StorageError) -> PlatformError {
    err.into_platform()
}

pub fn map_join_error(err: JoinError) -> PlatformError {
    PlatformError::Internal(format!("Task join error: {err}"))
}

//! Profile repository implementation using SQLite
//!
//! One row per user; `user_id` carries a UNIQUE constraint so concurrent
//! onboarding of the same identity cannot produce two profiles.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use familylegacy_common::storage::StorageError;
use familylegacy_core::ProfileRepository as ProfileRepositoryPort;
use familylegacy_domain::{
    PlatformError, Profile, ProfileChanges, Result as DomainResult, Role, SubscriptionStatus,
    SubscriptionTier,
};
use rusqlite::{params, Row};
use tokio::task;
use tracing::debug;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_storage_error, InfraError};

const PROFILE_COLUMNS: &str = "id, user_id, role, has_paid_one_time_fee, subscription_tier,
     subscription_status, marketplace_access, created_at, updated_at";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn get(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            find_by_user_id(&conn, &user_id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Profile> {
            let conn = db.get_connection()?;
            let result = conn.execute(
                "INSERT INTO profiles (id, user_id, role, has_paid_one_time_fee, subscription_tier,
                     subscription_status, marketplace_access, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    profile.id,
                    profile.user_id,
                    profile.role.as_str(),
                    bool_to_int(profile.has_paid_one_time_fee),
                    profile.subscription_tier.as_str(),
                    profile.subscription_status.as_str(),
                    bool_to_int(profile.marketplace_access),
                    to_millis(profile.created_at),
                    to_millis(profile.updated_at),
                ],
            );

            match result {
                Ok(_) => {
                    debug!(user_id = %profile.user_id, "profile row inserted");
                    Ok(profile)
                }
                Err(err) if err.is_unique_violation() => {
                    Err(PlatformError::Conflict("Profile already exists".into()))
                }
                Err(err) => Err(map_storage_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, user_id: &str, changes: ProfileChanges) -> DomainResult<Profile> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Profile> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            let updated = tx
                .execute(
                    "UPDATE profiles SET
                         has_paid_one_time_fee = COALESCE(?1, has_paid_one_time_fee),
                         subscription_tier = COALESCE(?2, subscription_tier),
                         subscription_status = COALESCE(?3, subscription_status),
                         marketplace_access = COALESCE(?4, marketplace_access),
                         updated_at = COALESCE(?5, updated_at)
                     WHERE user_id = ?6",
                    params![
                        changes.has_paid_one_time_fee.map(bool_to_int),
                        changes.subscription_tier.map(|t| t.as_str()),
                        changes.subscription_status.map(|s| s.as_str()),
                        changes.marketplace_access.map(bool_to_int),
                        changes.updated_at.map(to_millis),
                        user_id,
                    ],
                )
                .map_err(map_sql_error)?;

            if updated == 0 {
                return Err(PlatformError::NotFound("Profile not found".into()));
            }

            let profile = tx
                .query_row(
                    &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
                    params![user_id],
                    map_profile_row,
                )
                .map_err(map_sql_error)?;
            tx.commit().map_err(map_sql_error)?;

            Ok(profile)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Profile>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at ASC, rowid ASC"
                ))
                .map_err(map_sql_error)?;
            let rows = stmt.query_map([], map_profile_row).map_err(map_sql_error)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let deleted = conn
                .execute("DELETE FROM profiles WHERE user_id = ?1", params![user_id])
                .map_err(map_storage_error)?;
            if deleted == 0 {
                return Err(PlatformError::NotFound("Profile not found".into()));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

fn find_by_user_id(
    conn: &familylegacy_common::storage::SqliteConnection,
    user_id: &str,
) -> DomainResult<Option<Profile>> {
    let result = conn.query_row(
        &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
        params![user_id],
        map_profile_row,
    );

    match result {
        Ok(profile) => Ok(Some(profile)),
        Err(StorageError::Rusqlite(rusqlite::Error::QueryReturnedNoRows)) => Ok(None),
        Err(err) => Err(map_storage_error(err)),
    }
}

fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        role: parse_column::<Role>(row, 2)?,
        has_paid_one_time_fee: int_to_bool(row.get(3)?),
        subscription_tier: parse_column::<SubscriptionTier>(row, 4)?,
        subscription_status: parse_column::<SubscriptionStatus>(row, 5)?,
        marketplace_access: int_to_bool(row.get(6)?),
        created_at: from_millis(row, 7)?,
        updated_at: from_millis(row, 8)?,
    })
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Parse a TEXT column through the enum's `FromStr`.
pub(crate) fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })
}

pub(crate) fn to_millis(value: DateTime<Utc>) -> i64 {
    value.timestamp_millis()
}

pub(crate) fn from_millis(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Integer,
            format!("timestamp out of range: {millis}").into(),
        )
    })
}

fn map_sql_error(err: rusqlite::Error) -> PlatformError {
    PlatformError::from(InfraError::from(err))
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

fn int_to_bool(value: i64) -> bool {
    value != 0
}

// =============================================================================
// Tests
// =============================================================================

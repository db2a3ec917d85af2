//! Headcount storage contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the two-key load/save API over device key-value storage.
//! - Keep SQL and wire-encoding details inside the persistence boundary.
//!
//! # Invariants
//! - The count key holds a non-negative decimal integer as text.
//! - The records key holds a JSON-encoded record array.
//! - Reads reject malformed persisted state instead of masking it.

use crate::db::DbError;
use crate::model::record::HeadcountRecord;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the current count.
pub const COUNT_KEY: &str = "company-headcount";
/// Storage key for the JSON-encoded record array.
pub const RECORDS_KEY: &str = "company-headcount-records";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for headcount persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData { key: &'static str, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData { key, message } => {
                write!(f, "invalid persisted data under `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the two headcount storage keys.
pub trait HeadcountRepository {
    /// Loads the persisted count; `None` when the key is absent.
    fn load_count(&self) -> RepoResult<Option<u32>>;
    /// Persists the current count.
    fn save_count(&self, count: u32) -> RepoResult<()>;
    /// Loads the persisted record array; `None` when the key is absent.
    fn load_records(&self) -> RepoResult<Option<Vec<HeadcountRecord>>>;
    /// Persists the record array.
    fn save_records(&self, records: &[HeadcountRecord]) -> RepoResult<()>;
}

/// SQLite-backed headcount repository over the `storage` table.
pub struct SqliteHeadcountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHeadcountRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn get_value(&self, key: &'static str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_value(&self, key: &'static str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO storage (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

impl HeadcountRepository for SqliteHeadcountRepository<'_> {
    fn load_count(&self) -> RepoResult<Option<u32>> {
        let Some(raw) = self.get_value(COUNT_KEY)? else {
            return Ok(None);
        };

        let count = raw.trim().parse::<u32>().map_err(|_| RepoError::InvalidData {
            key: COUNT_KEY,
            message: format!("expected non-negative integer, got `{raw}`"),
        })?;
        Ok(Some(count))
    }

    fn save_count(&self, count: u32) -> RepoResult<()> {
        self.put_value(COUNT_KEY, &count.to_string())
    }

    fn load_records(&self) -> RepoResult<Option<Vec<HeadcountRecord>>> {
        let Some(raw) = self.get_value(RECORDS_KEY)? else {
            return Ok(None);
        };

        let records =
            serde_json::from_str::<Vec<HeadcountRecord>>(&raw).map_err(|err| {
                RepoError::InvalidData {
                    key: RECORDS_KEY,
                    message: err.to_string(),
                }
            })?;
        Ok(Some(records))
    }

    fn save_records(&self, records: &[HeadcountRecord]) -> RepoResult<()> {
        let encoded = serde_json::to_string(records).map_err(|err| RepoError::InvalidData {
            key: RECORDS_KEY,
            message: err.to_string(),
        })?;
        self.put_value(RECORDS_KEY, &encoded)
    }
}

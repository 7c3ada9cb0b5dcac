use async_trait::async_trait;
use derive_more::{Display, Error, From};

pub mod sqlite;

#[derive(Debug, Display, Error, From)]
pub enum StorageError {
    #[display("database error: {_0}")]
    Sqlx(#[error(source)] sqlx::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Outcome of a write that targets a single id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affected {
    Applied,
    NotFound,
}

impl Affected {
    pub fn from_rows(rows: u64) -> Self {
        if rows == 0 {
            Affected::NotFound
        } else {
            Affected::Applied
        }
    }
}

// a catpic repository is shared across request tasks, sqlx::Pool is thread safe.
// reads come back as Ok(Some) / Ok(None) / Err so "no row" is never confused with a failure
#[async_trait]
pub trait CatPicRepository: Send + Sync {
    async fn ensure_schema(&self) -> StorageResult<()>;

    async fn insert(&self, id: &str, data: &[u8]) -> StorageResult<()>;
    async fn fetch_data(&self, id: &str) -> StorageResult<Option<Vec<u8>>>;
    async fn list_ids(&self) -> StorageResult<Vec<String>>;

    async fn replace_data(&self, id: &str, data: &[u8]) -> StorageResult<Affected>;
    async fn delete(&self, id: &str) -> StorageResult<Affected>;
}

use crate::database::{Affected, CatPicRepository, StorageResult};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS cat_pics (id TEXT PRIMARY KEY, data BLOB NOT NULL)";

pub struct SqliteCatPicRepository {
    pool: Pool<Sqlite>,
}

impl SqliteCatPicRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatPicRepository for SqliteCatPicRepository {
    async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, id: &str, data: &[u8]) -> StorageResult<()> {
        sqlx::query("INSERT INTO cat_pics (id, data) VALUES (?, ?)")
            .bind(id)
            .bind(data)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn fetch_data(&self, id: &str) -> StorageResult<Option<Vec<u8>>> {
        let data = sqlx::query_scalar::<_, Vec<u8>>("SELECT data FROM cat_pics WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(data)
    }

    async fn list_ids(&self) -> StorageResult<Vec<String>> {
        // only project the id, the blobs can be megabytes each
        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM cat_pics")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    async fn replace_data(&self, id: &str, data: &[u8]) -> StorageResult<Affected> {
        let result = sqlx::query("UPDATE cat_pics SET data = ? WHERE id = ?")
            .bind(data)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Affected::from_rows(result.rows_affected()))
    }

    async fn delete(&self, id: &str) -> StorageResult<Affected> {
        let result = sqlx::query("DELETE FROM cat_pics WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Affected::from_rows(result.rows_affected()))
    }
}

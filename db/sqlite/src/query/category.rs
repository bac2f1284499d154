use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::category::CategoryModel};

const INSERT: &str = "INSERT INTO \"categories\" (\"id\", \"created_at\", \"updated_at\", \"name\", \"image_path\") VALUES (?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"image_path\" FROM \"categories\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"image_path\" FROM \"categories\" ORDER BY \"created_at\" DESC";
const SELECT_LATEST: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"image_path\" FROM \"categories\" ORDER BY \"created_at\" DESC LIMIT 1";
const UPDATE: &str = "UPDATE \"categories\" SET \"updated_at\" = ?, \"name\" = ?, \"image_path\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"categories\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    bk_log::info(Some("🔧"), "[SQLite] Setting up categories table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"categories\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"name\" text, \"image_path\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_LATEST).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_category(&self, value: &CategoryModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.image_path()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_category(&self, id: &Uuid) -> Result<CategoryModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_categories(&self) -> Result<Vec<CategoryModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_latest_category(&self) -> Result<Option<CategoryModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT_LATEST)).await?)
    }

    pub async fn update_category(&self, value: &CategoryModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.image_path())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_category(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}

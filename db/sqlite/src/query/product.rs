use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::product::ProductModel};

const INSERT: &str = "INSERT INTO \"products\" (\"id\", \"created_at\", \"updated_at\", \"category_id\", \"name\", \"price\", \"image_path\") VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"category_id\", \"name\", \"price\", \"image_path\" FROM \"products\" WHERE \"id\" = ?";
const SELECT_MANY_BY_CATEGORY_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"category_id\", \"name\", \"price\", \"image_path\" FROM \"products\" WHERE \"category_id\" = ? ORDER BY \"created_at\" DESC";
const UPDATE: &str = "UPDATE \"products\" SET \"updated_at\" = ?, \"name\" = ?, \"price\" = ?, \"image_path\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"products\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    bk_log::info(Some("🔧"), "[SQLite] Setting up products table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"products\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"category_id\" blob, \"name\" text, \"price\" real, \"image_path\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY_BY_CATEGORY_ID).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_product(&self, value: &ProductModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.category_id())
                .bind(value.name())
                .bind(value.price())
                .bind(value.image_path()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_product(&self, id: &Uuid) -> Result<ProductModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_products_by_category_id(
        &self,
        category_id: &Uuid,
    ) -> Result<Vec<ProductModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_CATEGORY_ID).bind(category_id))
            .await?)
    }

    pub async fn update_product(&self, value: &ProductModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.price())
                .bind(value.image_path())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_product(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}

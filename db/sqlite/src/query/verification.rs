use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::verification::VerificationModel};

const INSERT: &str = "INSERT INTO \"verifications\" (\"id\", \"created_at\", \"updated_at\", \"contact\", \"kind\", \"code\") VALUES (?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"contact\", \"kind\", \"code\" FROM \"verifications\" WHERE \"id\" = ?";
const SELECT_LATEST_BY_CONTACT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"contact\", \"kind\", \"code\" FROM \"verifications\" WHERE \"contact\" = ? ORDER BY \"created_at\" DESC LIMIT 1";
const UPDATE: &str = "UPDATE \"verifications\" SET \"updated_at\" = ?, \"code\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"verifications\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    bk_log::info(Some("🔧"), "[SQLite] Setting up verifications table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"verifications\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"contact\" text, \"kind\" text, \"code\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_LATEST_BY_CONTACT).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_verification(&self, value: &VerificationModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.contact())
                .bind(value.kind())
                .bind(value.code()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_verification(&self, id: &Uuid) -> Result<VerificationModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_latest_verification_by_contact(
        &self,
        contact: &str,
    ) -> Result<Option<VerificationModel>> {
        Ok(self
            .fetch_optional(sqlx::query_as(SELECT_LATEST_BY_CONTACT).bind(contact))
            .await?)
    }

    pub async fn update_verification(&self, value: &VerificationModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.code())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_verification(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}

use sqlx::{
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqlitePoolOptions, SqliteQueryResult, SqliteRow},
    Error, Pool, Sqlite,
};

use crate::query::{category, product, verification};

pub struct SqliteDb {
    pool: Pool<Sqlite>,
}

impl SqliteDb {
    pub async fn new(path: &str, max_connections: &u32) -> Self {
        bk_log::info(Some("⚡"), "[SQLite] Initializing component");

        let url = format!("sqlite:{path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(*max_connections)
            .connect(&url)
            .await
            .unwrap();

        Self::init(&pool).await;

        Self { pool }
    }

    pub async fn execute<'a>(
        &self,
        query: Query<'a, Sqlite, SqliteArguments<'a>>,
    ) -> Result<SqliteQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_one<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<T, Error> {
        query.fetch_one(&self.pool).await
    }

    pub async fn fetch_optional<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }

    async fn init(pool: &Pool<Sqlite>) {
        tokio::join!(
            category::init(pool),
            product::init(pool),
            verification::init(pool)
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use super::SqliteDb;
    use crate::model::{
        category::CategoryModel, product::ProductModel, verification::VerificationModel,
    };

    async fn test_db(dir: &tempfile::TempDir) -> SqliteDb {
        let path = dir.path().join("test.db");
        SqliteDb::new(&path.to_string_lossy(), &1).await
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[tokio::test]
    async fn categories_round_trip_and_order_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let db = test_db(&dir).await;

        let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        for (idx, id) in ids.iter().enumerate() {
            let created_at = at(1_700_000_000 + idx as i64);
            let model = CategoryModel::new(
                id,
                &created_at,
                &created_at,
                &format!("category-{idx}"),
                &None,
            );
            db.insert_category(&model).await.unwrap();
        }

        let fetched = db.select_category(&ids[0]).await.unwrap();
        assert_eq!(fetched.name(), "category-0");
        assert_eq!(*fetched.created_at(), at(1_700_000_000));

        let all = db.select_many_categories().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name(), "category-2");
        assert_eq!(all[2].name(), "category-0");

        let latest = db.select_latest_category().await.unwrap().unwrap();
        assert_eq!(latest.id(), &ids[2]);
    }

    #[tokio::test]
    async fn category_update_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let db = test_db(&dir).await;

        let id = Uuid::new_v4();
        let model = CategoryModel::new(&id, &at(1), &at(1), "books", &None);
        db.insert_category(&model).await.unwrap();

        let updated = CategoryModel::new(
            &id,
            &at(1),
            &at(2),
            "ebooks",
            &Some("media/ebooks.png".to_owned()),
        );
        db.update_category(&updated).await.unwrap();

        let fetched = db.select_category(&id).await.unwrap();
        assert_eq!(fetched.name(), "ebooks");
        assert_eq!(*fetched.updated_at(), at(2));
        assert_eq!(
            fetched.image_path().as_deref(),
            Some("media/ebooks.png")
        );

        db.delete_category(&id).await.unwrap();
        assert!(db.select_category(&id).await.is_err());
    }

    #[tokio::test]
    async fn products_are_scoped_to_their_category() {
        let dir = tempfile::tempdir().unwrap();
        let db = test_db(&dir).await;

        let category_id = Uuid::new_v4();
        let other_category_id = Uuid::new_v4();

        for (idx, category) in [category_id, category_id, other_category_id]
            .iter()
            .enumerate()
        {
            let created_at = at(100 + idx as i64);
            let model = ProductModel::new(
                &Uuid::new_v4(),
                &created_at,
                &created_at,
                category,
                &format!("product-{idx}"),
                &19.99,
                &None,
            );
            db.insert_product(&model).await.unwrap();
        }

        let scoped = db
            .select_many_products_by_category_id(&category_id)
            .await
            .unwrap();
        assert_eq!(scoped.len(), 2);
        assert_eq!(scoped[0].name(), "product-1");
        assert_eq!(scoped[1].name(), "product-0");
        assert_eq!(*scoped[0].price(), 19.99);
    }

    #[tokio::test]
    async fn latest_verification_wins_per_contact() {
        let dir = tempfile::tempdir().unwrap();
        let db = test_db(&dir).await;

        for (idx, code) in ["111111", "222222"].iter().enumerate() {
            let created_at = at(50 + idx as i64);
            let model = VerificationModel::new(
                &Uuid::new_v4(),
                &created_at,
                &created_at,
                "user@example.com",
                "email",
                code,
            );
            db.insert_verification(&model).await.unwrap();
        }

        let latest = db
            .select_latest_verification_by_contact("user@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.code(), "222222");

        assert!(db
            .select_latest_verification_by_contact("+998901234567")
            .await
            .unwrap()
            .is_none());
    }
}

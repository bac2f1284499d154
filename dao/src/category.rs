use std::path::Path;

use anyhow::Result;
use bk_db_sqlite::model::category::CategoryModel as CategorySqliteModel;
use bk_utils::media::{self, MediaFields};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    base::{BaseDao, BaseUuidDao},
    product::ProductDao,
    Db,
};

pub struct CategoryDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    image_path: Option<String>,
}

impl CategoryDao {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.to_owned(),
            image_path: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_path(&self) -> &Option<String> {
        &self.image_path
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_image(&mut self, image_path: &str, size: &u64) -> Result<()> {
        media::max_media_file_size_validator(size)?;
        self.image_path = Some(image_path.to_owned());
        Ok(())
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.insert_category(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_category(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let categories = db.select_many_categories().await?;
                let mut categories_data = Vec::with_capacity(categories.len());
                for category in &categories {
                    categories_data.push(Self::from_sqlitedb_model(category));
                }
                Ok(categories_data)
            }
        }
    }

    pub async fn db_select_latest(db: &Db) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_latest_category()
                .await?
                .as_ref()
                .map(Self::from_sqlitedb_model)),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::SqliteDb(db) => db.update_category(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        let category_data = Self::db_select(db, id).await?;

        let products_data = ProductDao::db_select_many_by_category_id(db, id).await?;
        for product_data in &products_data {
            ProductDao::db_delete(db, product_data.id()).await?;
        }

        match db {
            Db::SqliteDb(db) => db.delete_category(id).await?,
        }

        media::delete_file(&category_data, "image");

        Ok(())
    }

    fn from_sqlitedb_model(model: &CategorySqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            image_path: model.image_path().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> CategorySqliteModel {
        CategorySqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.image_path,
        )
    }
}

impl BaseDao for CategoryDao {
    fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }
}

impl BaseUuidDao for CategoryDao {
    fn id(&self) -> &Uuid {
        &self.id
    }
}

impl MediaFields for CategoryDao {
    fn media_path(&self, field: &str) -> Option<&Path> {
        match field {
            "image" => self.image_path.as_deref().map(Path::new),
            _ => None,
        }
    }
}

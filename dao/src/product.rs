use std::path::Path;

use anyhow::Result;
use bk_db_sqlite::model::product::ProductModel as ProductSqliteModel;
use bk_utils::{
    media::{self, MediaFields},
    price::price_formatter,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    base::{BaseDao, BaseUuidDao},
    Db,
};

pub struct ProductDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_id: Uuid,
    name: String,
    price: f64,
    image_path: Option<String>,
}

impl ProductDao {
    pub fn new(category_id: &Uuid, name: &str, price: &f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            category_id: *category_id,
            name: name.to_owned(),
            price: *price,
            image_path: None,
        }
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &f64 {
        &self.price
    }

    /// Price as shown to users, via the shared formatter.
    pub fn price_display(&self) -> String {
        price_formatter(self.price)
    }

    pub fn image_path(&self) -> &Option<String> {
        &self.image_path
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_price(&mut self, price: &f64) {
        self.price = *price;
    }

    pub fn set_image(&mut self, image_path: &str, size: &u64) -> Result<()> {
        media::max_media_file_size_validator(size)?;
        self.image_path = Some(image_path.to_owned());
        Ok(())
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.insert_product(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_product(id).await?)),
        }
    }

    pub async fn db_select_many_by_category_id(db: &Db, category_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let products = db.select_many_products_by_category_id(category_id).await?;
                let mut products_data = Vec::with_capacity(products.len());
                for product in &products {
                    products_data.push(Self::from_sqlitedb_model(product));
                }
                Ok(products_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::SqliteDb(db) => db.update_product(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        let product_data = Self::db_select(db, id).await?;

        match db {
            Db::SqliteDb(db) => db.delete_product(id).await?,
        }

        media::delete_file(&product_data, "image");

        Ok(())
    }

    fn from_sqlitedb_model(model: &ProductSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            category_id: *model.category_id(),
            name: model.name().to_owned(),
            price: *model.price(),
            image_path: model.image_path().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> ProductSqliteModel {
        ProductSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.category_id,
            &self.name,
            &self.price,
            &self.image_path,
        )
    }
}

impl BaseDao for ProductDao {
    fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }
}

impl BaseUuidDao for ProductDao {
    fn id(&self) -> &Uuid {
        &self.id
    }
}

impl MediaFields for ProductDao {
    fn media_path(&self, field: &str) -> Option<&Path> {
        match field {
            "image" => self.image_path.as_deref().map(Path::new),
            _ => None,
        }
    }
}

use sqlx::{
    prelude::FromRow,
    types::chrono::{DateTime, Utc},
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct ProductModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_id: Uuid,
    name: String,
    price: f64,
    image_path: Option<String>,
}

impl ProductModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        category_id: &Uuid,
        name: &str,
        price: &f64,
        image_path: &Option<String>,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            category_id: *category_id,
            name: name.to_owned(),
            price: *price,
            image_path: image_path.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
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

    pub fn image_path(&self) -> &Option<String> {
        &self.image_path
    }
}

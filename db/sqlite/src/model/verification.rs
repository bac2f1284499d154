use sqlx::{
    prelude::FromRow,
    types::chrono::{DateTime, Utc},
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct VerificationModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    contact: String,
    kind: String,
    code: String,
}

impl VerificationModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        contact: &str,
        kind: &str,
        code: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            contact: contact.to_owned(),
            kind: kind.to_owned(),
            code: code.to_owned(),
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

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

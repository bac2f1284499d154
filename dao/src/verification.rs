use std::str::FromStr;

use anyhow::Result;
use bk_db_sqlite::model::verification::VerificationModel as VerificationSqliteModel;
use bk_utils::contact::{self, ContactKind};
use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::{
    base::{BaseDao, BaseUuidDao},
    Db,
};

/// A pending confirmation code for an email address or phone number. The
/// contact is classified at construction; anything that is neither fails
/// with the validation error naming the offending value.
pub struct VerificationDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    contact: String,
    kind: ContactKind,
    code: String,
}

impl VerificationDao {
    pub fn new(contact: &str) -> Result<Self> {
        let kind = contact::is_email_or_phone_number(contact)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            contact: contact.to_owned(),
            kind,
            code: generate_code(),
        })
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn kind(&self) -> &ContactKind {
        &self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Fresh code for resend flows; persist with `db_update`.
    pub fn regenerate_code(&mut self) {
        self.code = generate_code();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.insert_verification(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::SqliteDb(db) => Self::from_sqlitedb_model(&db.select_verification(id).await?),
        }
    }

    pub async fn db_select_latest_by_contact(db: &Db, contact: &str) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => match db.select_latest_verification_by_contact(contact).await? {
                Some(verification) => Ok(Some(Self::from_sqlitedb_model(&verification)?)),
                None => Ok(None),
            },
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::SqliteDb(db) => db.update_verification(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.delete_verification(id).await,
        }
    }

    fn from_sqlitedb_model(model: &VerificationSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            contact: model.contact().to_owned(),
            kind: ContactKind::from_str(model.kind())?,
            code: model.code().to_owned(),
        })
    }

    fn to_sqlitedb_model(&self) -> VerificationSqliteModel {
        VerificationSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.contact,
            &self.kind.to_string(),
            &self.code,
        )
    }
}

fn generate_code() -> String {
    rand::thread_rng().gen_range(100000..=999999).to_string()
}

impl BaseDao for VerificationDao {
    fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }
}

impl BaseUuidDao for VerificationDao {
    fn id(&self) -> &Uuid {
        &self.id
    }
}

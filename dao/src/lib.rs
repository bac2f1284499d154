use bk_db_sqlite::db::SqliteDb;

pub mod base;
pub mod category;
pub mod product;
pub mod verification;

pub enum Db {
    SqliteDb(SqliteDb),
}

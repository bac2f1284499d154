use std::sync::Arc;

use bk_config::app::AppConfigMode;
use bk_dao::{category::CategoryDao, Db};
use bk_db_sqlite::db::SqliteDb;
use bk_notify::Notifier;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = bk_config::from_path(&config_path);

    bk_log::init(config.log().display_level(), config.log().level_filter());

    bk_log::info(Some("🚀"), "[Basekit] Starting");

    if let AppConfigMode::Development = config.app().mode() {
        bk_log::warn(
            None,
            "[Basekit] Development mode: notification senders print to stdout only",
        );
    }

    let db = if let Some(sqlite) = config.db().sqlite() {
        Arc::new(Db::SqliteDb(
            SqliteDb::new(sqlite.path(), sqlite.max_connections()).await,
        ))
    } else {
        bk_log::panic(None, "[Basekit] No database configuration is specified");
        return;
    };

    match CategoryDao::db_select_many(&db).await {
        Ok(categories_data) => bk_log::info(
            Some("📦"),
            format!("[Basekit] {} categories in store", categories_data.len()),
        ),
        Err(err) => bk_log::error(
            None,
            format!("[Basekit] Failed reading categories: {err}"),
        ),
    }

    let (notifier, _notify_sender) = Notifier::new();

    bk_log::info(Some("🚀"), "[Basekit] Ready");

    tokio::select! {
        res = notifier.run() => {
            if let Err(err) = res {
                bk_log::error(None, format!("[Basekit] Notifier worker failed: {err}"));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            bk_log::info(Some("🛑"), "[Basekit] Shutting down");
        }
    }
}

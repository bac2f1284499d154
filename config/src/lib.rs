use std::fs::File;

use serde::Deserialize;

use self::{app::AppConfig, db::DbConfig, log::LogConfig};

pub mod app;
pub mod db;
pub mod log;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    db: DbConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }
}

pub fn from_path(path: &str) -> Config {
    let file = File::open(path).expect("config file must exist and be readable");
    serde_yaml::from_reader::<_, Config>(file).expect("config file must be valid YAML")
}

#[cfg(test)]
mod tests {
    use crate::app::AppConfigMode;

    const CONFIG_YAML: &str = "
app:
  mode: development
log:
  display_level: true
  level_filter: info
db:
  sqlite:
    path: ./data.db
    max_connections: 10
";

    #[test]
    fn parses_a_full_config() {
        let config = serde_yaml::from_str::<super::Config>(CONFIG_YAML).unwrap();

        assert!(matches!(config.app().mode(), AppConfigMode::Development));
        assert!(*config.log().display_level());
        assert_eq!(config.log().level_filter(), "info");

        let sqlite = config.db().sqlite().as_ref().unwrap();
        assert_eq!(sqlite.path(), "./data.db");
        assert_eq!(*sqlite.max_connections(), 10);
    }

    #[test]
    fn db_sections_are_optional() {
        let config = serde_yaml::from_str::<super::Config>(
            "
app:
  mode: production
log:
  display_level: false
  level_filter: warn
db: {}
",
        )
        .unwrap();

        assert!(config.db().sqlite().is_none());
    }
}

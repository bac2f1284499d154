use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("BK_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        panic!("config.yml file specified in BK_CONFIG_PATH environment variable or current directory must exist")
    }

    config_path
}

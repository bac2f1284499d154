use std::fmt::Display;

use backtrace::Backtrace;
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `level_filter` is any `tracing` filter
/// directive ("info", "bk_dao=debug", ...); `RUST_LOG` overrides it.
pub fn init(display_level: &bool, level_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_filter));

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_env_filter(filter)
        .init();
}

fn prefixed<T: Display>(prefix: Option<&str>, msg: T) -> String {
    match prefix {
        Some(prefix) => format!("{prefix} {msg}"),
        None => msg.to_string(),
    }
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{}", prefixed(prefix, msg));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{}", prefixed(prefix, msg));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{}", prefixed(prefix, msg));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{}", prefixed(prefix, msg));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let show_backtrace = std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1");
    match show_backtrace {
        true => error!("{}\n{:?}", prefixed(prefix, msg), Backtrace::new()),
        false => error!("{}", prefixed(prefix, msg)),
    };
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) {
    panic!("{}", prefixed(prefix, msg));
}

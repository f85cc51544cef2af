use std::path::PathBuf;

use updown_core::config::{string_or, var_or};

/// Counter service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CounterConfig {
    /// TCP port for the HTTP server (default 8000). Env var: `COUNTER_PORT`.
    pub counter_port: u16,
    /// Directory with the static page (default "dist"). Env var: `COUNTER_DIST_DIR`.
    pub dist_dir: PathBuf,
    /// Starting value of the counter (default 0). Env var: `COUNTER_INITIAL_VALUE`.
    pub initial_value: i64,
}

impl CounterConfig {
    pub fn from_env() -> Self {
        Self {
            counter_port: var_or("COUNTER_PORT", 8000),
            dist_dir: PathBuf::from(string_or("COUNTER_DIST_DIR", "dist")),
            initial_value: var_or("COUNTER_INITIAL_VALUE", 0),
        }
    }
}

use updown_core::config::string_or;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Where relative paths like `/up` are sent (default
    /// "http://localhost:8000"). Env var: `UPDOWN_BASE_URL`.
    pub base_url: String,
}

impl RenderConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: string_or("UPDOWN_BASE_URL", DEFAULT_BASE_URL),
        }
    }

    /// Replace the base URL when `base_url` is given (e.g. from a CLI flag).
    pub fn with_override(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }
}

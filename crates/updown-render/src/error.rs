/// Why a fetch did not produce text to render.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("empty url")]
    EmptyUrl,
    #[error("invalid url {0}")]
    InvalidUrl(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyUrl => "EMPTY_URL",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Status(_) => "STATUS",
            Self::Network(_) => "NETWORK",
        }
    }
}

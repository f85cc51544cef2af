use reqwest::{Client, StatusCode, Url};

use crate::domain::source::TextSource;
use crate::error::FetchError;

/// `TextSource` over HTTP. Absolute URLs (any scheme case) are used as given;
/// everything else, including `//host/path`, is resolved against `base_url`
/// the way a browser resolves links on a page served from it.
#[derive(Clone, Debug)]
pub struct HttpTextSource {
    client: Client,
    base_url: Url,
}

impl HttpTextSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url = parse_http_url(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        let resolved = match Url::parse(url) {
            Ok(absolute) => absolute,
            Err(_) => self
                .base_url
                .join(url)
                .map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?,
        };
        ensure_http(resolved)
    }
}

fn parse_http_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    ensure_http(parsed)
}

fn ensure_http(url: Url) -> Result<Url, FetchError> {
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}

impl TextSource for HttpTextSource {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let url = self.resolve(url)?;
        tracing::debug!(%url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.text().await?)
    }
}

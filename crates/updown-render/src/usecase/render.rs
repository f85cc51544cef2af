use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::endpoint::Endpoint;
use crate::domain::source::TextSource;
use crate::domain::target::DisplayTarget;
use crate::error::FetchError;

/// GET `url` from `source` and, on a 200, replace `target`'s content with the
/// body. On any failure the target is not touched and the error is returned.
pub async fn fetch_and_render<S, T>(
    source: &S,
    url: &str,
    target: &T,
) -> Result<String, FetchError>
where
    S: TextSource,
    T: DisplayTarget + ?Sized,
{
    if url.is_empty() {
        return Err(FetchError::EmptyUrl);
    }
    match source.get_text(url).await {
        Ok(body) => {
            target.render(&body);
            tracing::debug!(url, len = body.len(), "rendered");
            Ok(body)
        }
        Err(e) => {
            tracing::warn!(url, kind = e.kind(), error = %e, "fetch failed, display unchanged");
            Err(e)
        }
    }
}

// ── FetchAndRender ───────────────────────────────────────────────────────────

pub struct FetchAndRenderUseCase<S: TextSource, T: DisplayTarget> {
    pub source: S,
    pub target: T,
}

impl<S: TextSource, T: DisplayTarget> FetchAndRenderUseCase<S, T> {
    pub async fn execute(&self, url: &str) -> Result<String, FetchError> {
        fetch_and_render(&self.source, url, &self.target).await
    }

    pub async fn up(&self) -> Result<String, FetchError> {
        self.execute(Endpoint::Up.path()).await
    }

    pub async fn down(&self) -> Result<String, FetchError> {
        self.execute(Endpoint::Down.path()).await
    }
}

impl<S, T> FetchAndRenderUseCase<S, T>
where
    S: TextSource + 'static,
    T: DisplayTarget + 'static,
{
    /// Dispatch `execute` onto the runtime and return at once. The handle
    /// resolves once, when the response (or failure) arrives.
    pub fn spawn(
        self: &Arc<Self>,
        url: impl Into<String>,
    ) -> JoinHandle<Result<String, FetchError>> {
        let this = Arc::clone(self);
        let url = url.into();
        tokio::spawn(async move { this.execute(&url).await })
    }

    pub fn spawn_endpoint(
        self: &Arc<Self>,
        endpoint: Endpoint,
    ) -> JoinHandle<Result<String, FetchError>> {
        self.spawn(endpoint.path())
    }
}

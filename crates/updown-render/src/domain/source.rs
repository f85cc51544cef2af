use std::future::Future;

use crate::error::FetchError;

/// Where response text comes from. `get_text` issues one GET and resolves to
/// the body iff the terminal status is exactly 200.
pub trait TextSource: Send + Sync {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Counter service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CounterServiceError {
    #[error("counter overflow")]
    Overflow,
}

impl CounterServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Overflow => "COUNTER_OVERFLOW",
        }
    }
}

impl IntoResponse for CounterServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Overflow => StatusCode::CONFLICT,
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

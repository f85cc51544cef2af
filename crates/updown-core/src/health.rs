use axum::http::StatusCode;

/// `GET /healthz`: the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: the process can serve traffic. Nothing external to wait on yet.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

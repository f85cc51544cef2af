use tracing::info;

use updown_core::tracing::init_tracing;
use updown_counter::config::CounterConfig;
use updown_counter::router::build_router_with_dist;
use updown_counter::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CounterConfig::from_env();
    if !config.dist_dir.is_dir() {
        tracing::warn!(
            dist_dir = %config.dist_dir.display(),
            "static directory not found, only the counter API will answer"
        );
    }

    let state = AppState::new(config.initial_value);
    let router = build_router_with_dist(state, &config.dist_dir);

    let addr = format!("0.0.0.0:{}", config.counter_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("counter service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

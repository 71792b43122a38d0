use mergington_activities::{config, roster, routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let store = roster::RosterStore::seeded();
    tracing::info!(activities = store.len(), capacity = ?config.capacity, "activity catalog seeded");

    let state = state::AppState::new(store, config.capacity);
    let app = routes::app(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "mergington activities listening");
    axum::serve(listener, app).await.expect("server failed");
}

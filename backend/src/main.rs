use rps_arena::{Config, sessions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let addr = config.addr();

    tracing::info!(
        room_ttl_secs = config.room_ttl.as_secs(),
        ai_exploit_rate = config.ai_exploit_rate,
        "Starting server on {}",
        addr
    );

    let session_store = match sessions::open_store(&config.session_database_url).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(
                %err,
                url = config.session_database_url,
                "Failed to open session store"
            );
            std::process::exit(1);
        }
    };
    let reaper = sessions::spawn_expired_session_reaper(
        session_store.clone(),
        config.session_cleanup_interval,
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%err, addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutting down");
    };

    let app = rps_arena::app_with_config(session_store, &config);
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!(%err, "Server error");
    }
    reaper.abort();
}

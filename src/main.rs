use kuaishou_hot::api::kuaishou::KuaishouApi;
use kuaishou_hot::app::build_app;
use kuaishou_hot::config::AppConfig;
use kuaishou_hot::models::cache::MemoryCache;
use kuaishou_hot::HotListService;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Kuaishou hot list service");

    let config = AppConfig::from_env();
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let api = KuaishouApi::new(&config)?;
    let cache = MemoryCache::new(Duration::from_secs(config.cache_ttl_secs));
    let service = Arc::new(HotListService::new(Arc::new(api), Arc::new(cache)));

    let app = build_app(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown())
        .await?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use timemeaning_site::{
    config::Config,
    api::routes::create_router,
    site::RouteRegistry,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    fmt().with_env_filter(filter).init();

    // Build the route table; a bad descriptor stops startup here
    let registry = RouteRegistry::site()?;
    info!(routes = registry.len(), "route table loaded");

    let server_addr = config.server_addr;
    let app_state = AppState::new(config, registry);
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    info!(addr = %server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

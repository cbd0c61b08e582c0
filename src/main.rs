use axum::serve;
use instrument_db::config::AppConfig;
use instrument_db::{build_app, build_store};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging, RUST_LOG overrides the Info default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Instrument DB: evaluation instrument lookup server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let store = Arc::new(build_store(&config)?);
    println!(
        "Reading instruments from '{}' and checklist items from '{}'",
        config.tables.instruments, config.tables.checklist_items
    );

    run_server(build_app(store, config.tables.clone()), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Instrument DB server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}

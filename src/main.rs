/**
 * Askboard Server Entry Point
 *
 * Loads configuration, connects the document store and serves the Axum
 * app.
 */

use askboard::server::config::ServerConfig;
use askboard::server::init::create_app;
use askboard::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "askboard=debug,info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("connecting to store at {}", config.database_url);
    let store = Store::connect(&config.database_url).await?;

    let app = create_app(store);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

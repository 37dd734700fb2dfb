use app_config::logging::{init_tracing, install_color_eyre, install_failfast_hook};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Any panic past this point is an unobserved failure: log and exit 1
    install_failfast_hook();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing from the explicit log configuration
    init_tracing(&config.log);

    // The persistence collaborator; swap in a real store by
    // implementing ItemRepository
    let repository = domain_items::MemoryItemRepository::new();

    // Build router: API routes nested under /api, plus the root-level
    // /health endpoint, docs, tracing, and the 404 fallback
    let api_routes = api::routes(repository);
    let app = axum_kit::create_router::<openapi::ApiDoc>(api_routes);

    info!(environment = ?config.environment, "Items API initialised");

    axum_kit::create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}

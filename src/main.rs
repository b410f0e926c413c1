//! Smoke-test CLI: connects to the configured backend and prints the first
//! page of the product catalog.

use std::env;
use std::sync::Arc;

use config::Config;
use dotenvy::dotenv;

use stockdesk::client::ApiClient;
use stockdesk::client::http::HttpTransport;
use stockdesk::domain::product::Product;
use stockdesk::grid::{GridController, GridStatus};
use stockdesk::models::config::ServerConfig;
use stockdesk::notify::LogNotifier;

fn main() {
    dotenv().ok();
    env_logger::init();

    let config_path = env::var("STOCKDESK_CONFIG").unwrap_or_else(|_| "stockdesk".to_string());

    let server_config: ServerConfig = match Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::with_prefix("STOCKDESK"))
        .build()
        .and_then(|settings| settings.try_deserialize())
    {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let transport = HttpTransport::from_config(&server_config);
    let client = ApiClient::new(Arc::new(transport));

    let grid: GridController<Product> =
        GridController::new(client, Arc::new(LogNotifier), server_config.default_page_size);
    grid.mount();

    let snapshot = grid.snapshot();
    if snapshot.status == GridStatus::Error {
        std::process::exit(1);
    }

    for product in &snapshot.items {
        log::info!("{:>8.2}  {}", product.price, product.name);
    }
    log::info!(
        "{} products total across {} pages",
        snapshot.total_count,
        snapshot.page_count
    );
}

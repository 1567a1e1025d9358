use clap::Parser;
use tesla_inventory::core::formatter;
use tesla_inventory::utils::logger;
use tesla_inventory::{CliConfig, InventoryClient};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tesla-inventory CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證輸入，避免送出無效查詢
    let filter = match config.search_filter() {
        Ok(filter) => filter,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let client = InventoryClient::new(config.api_endpoint.clone());

    match client.fetch_all(&filter, config.limit).await {
        Ok(vehicles) => {
            for vehicle in &vehicles {
                println!("{}", formatter::render(vehicle));
            }

            if config.verbose {
                println!(
                    "\n\nFound {} available in your search (limited to {})",
                    vehicles.len(),
                    config.limit
                );
            }
        }
        Err(e) => {
            tracing::error!("❌ Inventory search failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::client::{InventoryClient, INVENTORY_API_URL};
pub use utils::error::{InventoryError, Result};

use crate::core::client::INVENTORY_API_URL;
use crate::domain::model::{Condition, GeoFilter, Model, SearchFilter, CONDITIONS, MODELS};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tesla-inventory")]
#[command(about = "Search Tesla's public inventory API for matching vehicles")]
pub struct CliConfig {
    #[arg(short, long, help = "Model to search for (S, 3, X, Y)")]
    pub model: String,

    #[arg(short, long, help = "Condition of vehicle (new/used)")]
    pub condition: String,

    #[arg(short, long, default_value_t = 100, help = "Max number of cars to return")]
    pub limit: usize,

    #[arg(
        long,
        alias = "lat",
        allow_negative_numbers = true,
        help = "Latitude to use for search"
    )]
    pub latitude: Option<f64>,

    #[arg(
        long,
        alias = "lng",
        allow_negative_numbers = true,
        help = "Longitude to use for search"
    )]
    pub longitude: Option<f64>,

    #[arg(long, alias = "dist", help = "Max distance in miles from coordinates")]
    pub distance: Option<u32>,

    #[arg(long, default_value = INVENTORY_API_URL, help = "Inventory API endpoint")]
    pub api_endpoint: String,

    #[arg(short, long, help = "Print more detailed information, useful for debugging")]
    pub verbose: bool,
}

impl CliConfig {
    /// Turn raw CLI input into a typed filter, rejecting anything the
    /// vendor API would not accept. Runs before any network call.
    pub fn search_filter(&self) -> Result<SearchFilter> {
        let model = self.model.parse::<Model>().map_err(|_| {
            InventoryError::InvalidConfigValueError {
                field: "model".to_string(),
                value: self.model.clone(),
                reason: format!(
                    "not a valid Tesla model (expected one of {:?})",
                    MODELS.map(|m| m.to_string())
                ),
            }
        })?;

        let condition = self.condition.parse::<Condition>().map_err(|_| {
            InventoryError::InvalidConfigValueError {
                field: "condition".to_string(),
                value: self.condition.clone(),
                reason: format!(
                    "only these conditions are allowed: {:?}",
                    CONDITIONS.map(|c| c.to_string())
                ),
            }
        })?;

        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoFilter {
                latitude,
                longitude,
                range_miles: self.distance,
            }),
            (None, None) => None,
            _ => {
                return Err(InventoryError::ValidationError {
                    message: "Lat / Lng must be provided together".to_string(),
                })
            }
        };

        if let Some(distance) = self.distance {
            if location.is_none() {
                return Err(InventoryError::ValidationError {
                    message: "Distance requires Lat / Lng coordinates".to_string(),
                });
            }
            validate_range("distance", distance, 1, 200)?;
        }

        validate_url("api_endpoint", &self.api_endpoint)?;

        Ok(SearchFilter {
            model,
            condition,
            location,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.search_filter().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            model: "Y".to_string(),
            condition: "new".to_string(),
            limit: 100,
            latitude: None,
            longitude: None,
            distance: None,
            api_endpoint: INVENTORY_API_URL.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_model_rejected() {
        let mut config = base_config();
        config.model = "Z".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_condition_rejected() {
        let mut config = base_config();
        config.condition = "demo".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_latitude_without_longitude_rejected() {
        let mut config = base_config();
        config.latitude = Some(37.49);
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.longitude = Some(-121.94);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_distance_without_coordinates_rejected() {
        let mut config = base_config();
        config.distance = Some(50);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_distance_over_200_rejected() {
        let mut config = base_config();
        config.latitude = Some(37.49);
        config.longitude = Some(-121.94);
        config.distance = Some(201);
        assert!(config.validate().is_err());

        config.distance = Some(200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_filter_carries_location() {
        let mut config = base_config();
        config.latitude = Some(37.49);
        config.longitude = Some(-121.94);
        config.distance = Some(150);

        let filter = config.search_filter().unwrap();
        assert_eq!(filter.model, Model::Y);
        assert_eq!(filter.condition, Condition::New);
        let location = filter.location.unwrap();
        assert_eq!(location.range_miles, Some(150));
    }

    #[test]
    fn test_search_filter_without_location() {
        let filter = base_config().search_filter().unwrap();
        assert!(filter.location.is_none());
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Tesla models the inventory API knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    S,
    Three,
    X,
    Y,
}

pub const MODELS: [Model; 4] = [Model::S, Model::Three, Model::X, Model::Y];

impl Model {
    /// Query code expected by the vendor, e.g. "m3" or "mY".
    pub fn code(&self) -> &'static str {
        match self {
            Model::S => "mS",
            Model::Three => "m3",
            Model::X => "mX",
            Model::Y => "mY",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Model::S => "S",
            Model::Three => "3",
            Model::X => "X",
            Model::Y => "Y",
        };
        write!(f, "{}", letter)
    }
}

impl FromStr for Model {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Model::S),
            "3" => Ok(Model::Three),
            "X" => Ok(Model::X),
            "Y" => Ok(Model::Y),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    New,
    Used,
}

pub const CONDITIONS: [Condition; 2] = [Condition::New, Condition::Used];

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            _ => Err(()),
        }
    }
}

/// Geolocation part of a search. Latitude and longitude always travel
/// together; a range only makes sense when coordinates exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub range_miles: Option<u32>,
}

/// Validated search parameters, ready for the query builder.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub model: Model,
    pub condition: Condition,
    pub location: Option<GeoFilter>,
}

/// One vehicle record from the inventory API. Only the fields we render are
/// typed; everything else the vendor sends is kept in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "TrimName")]
    pub trim_name: String,

    #[serde(rename = "SalesMetro", default)]
    pub sales_metro: Option<String>,

    #[serde(rename = "StateProvince", default)]
    pub state_province: Option<String>,

    #[serde(rename = "TotalPrice")]
    pub total_price: f64,

    #[serde(rename = "Odometer")]
    pub odometer: u64,

    #[serde(rename = "IsDemo", default)]
    pub is_demo: bool,

    #[serde(rename = "VIN")]
    pub vin: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One page of inventory results.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub results: Vec<Vehicle>,

    // The vendor sends this as a number or a numeric string depending on the
    // endpoint version, so accept both.
    #[serde(deserialize_with = "number_or_string")]
    pub total_matches_found: usize,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(usize),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

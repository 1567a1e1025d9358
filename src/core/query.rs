use crate::domain::model::SearchFilter;
use serde::Serialize;

/// Records requested per page, matching what the vendor's own frontend asks
/// for.
pub const PAGE_SIZE: usize = 50;

/// The JSON object the vendor expects in the `query` URL parameter.
#[derive(Debug, Serialize)]
pub struct InventoryQuery<'a> {
    query: QueryBody<'a>,
    offset: usize,
    count: usize,
}

#[derive(Debug, Serialize)]
struct QueryBody<'a> {
    model: &'a str,
    condition: &'a str,
    market: &'a str,
    language: &'a str,
    super_region: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    lat: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    lng: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<u32>,
}

impl<'a> InventoryQuery<'a> {
    pub fn new(filter: &'a SearchFilter, offset: usize) -> Self {
        let location = filter.location.as_ref();

        Self {
            query: QueryBody {
                model: filter.model.code(),
                condition: filter.condition.as_str(),
                market: "US",
                language: "en",
                super_region: "north america",
                lat: location.map(|l| l.latitude),
                lng: location.map(|l| l.longitude),
                range: location.and_then(|l| l.range_miles),
            },
            offset,
            count: PAGE_SIZE,
        }
    }

    /// JSON-encoded form used as the `query` URL parameter value.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Condition, GeoFilter, Model};

    fn filter(location: Option<GeoFilter>) -> SearchFilter {
        SearchFilter {
            model: Model::Y,
            condition: Condition::New,
            location,
        }
    }

    #[test]
    fn test_query_shape_without_location() {
        let filter = filter(None);
        let encoded = InventoryQuery::new(&filter, 0).encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["query"]["model"], "mY");
        assert_eq!(value["query"]["condition"], "new");
        assert_eq!(value["query"]["market"], "US");
        assert_eq!(value["query"]["language"], "en");
        assert_eq!(value["query"]["super_region"], "north america");
        assert_eq!(value["offset"], 0);
        assert_eq!(value["count"], 50);

        // No coordinates requested, so the keys stay out of the query
        assert!(value["query"].get("lat").is_none());
        assert!(value["query"].get("lng").is_none());
        assert!(value["query"].get("range").is_none());
    }

    #[test]
    fn test_query_shape_with_location() {
        let filter = filter(Some(GeoFilter {
            latitude: 37.49,
            longitude: -121.94,
            range_miles: Some(100),
        }));
        let encoded = InventoryQuery::new(&filter, 50).encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["query"]["lat"], 37.49);
        assert_eq!(value["query"]["lng"], -121.94);
        assert_eq!(value["query"]["range"], 100);
        assert_eq!(value["offset"], 50);
    }

    #[test]
    fn test_range_omitted_when_unset() {
        let filter = filter(Some(GeoFilter {
            latitude: 37.49,
            longitude: -121.94,
            range_miles: None,
        }));
        let encoded = InventoryQuery::new(&filter, 0).encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["query"]["lat"], 37.49);
        assert!(value["query"].get("range").is_none());
    }
}

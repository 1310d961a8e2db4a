use serde::{Deserialize, Serialize};

/// Fixed greeting returned by the data listing endpoint.
const MESSAGE: &str = "Hello from Backend Service!";

/// API version reported in every data response.
const VERSION: &str = "1.0.0";

/// Activity status of a mock item, serialized as `"active"` / `"inactive"`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Inactive,
}

/// A static record representing a mock data entity with an activity status.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub status: ItemStatus,
}

/// # Item Collection
///
/// The `data` envelope of the data listing response. The items are a fixed
/// set constructed fresh per request, never mutated or persisted.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ItemCollection {
    pub items: Vec<Item>,
}

impl ItemCollection {
    /// The three mock records, in a fixed order.
    pub fn mock() -> Self {
        Self {
            items: vec![
                Item {
                    id: 1,
                    name: "Item 1".to_string(),
                    status: ItemStatus::Active,
                },
                Item {
                    id: 2,
                    name: "Item 2".to_string(),
                    status: ItemStatus::Active,
                },
                Item {
                    id: 3,
                    name: "Item 3".to_string(),
                    status: ItemStatus::Inactive,
                },
            ],
        }
    }
}

/// # Data Listing Response
///
/// Response format for the mock data endpoint.
///
/// ## Fields
/// - `message`: Fixed greeting string
/// - `timestamp`: ISO 8601 formatted timestamp of the request
/// - `version`: API version string ("1.0.0")
/// - `environment`: Deployment environment echoed from configuration
/// - `data`: [`ItemCollection`] with the three mock items
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello from Backend Service!",
///   "timestamp": "2024-03-10T15:30:45.123456",
///   "version": "1.0.0",
///   "environment": "development",
///   "data": {
///     "items": [
///       { "id": 1, "name": "Item 1", "status": "active" },
///       { "id": 2, "name": "Item 2", "status": "active" },
///       { "id": 3, "name": "Item 3", "status": "inactive" }
///     ]
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DataResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    pub data: ItemCollection,
}

impl DataResponse {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            message: MESSAGE.to_string(),
            timestamp: super::iso8601_now(),
            version: VERSION.to_string(),
            environment: environment.into(),
            data: ItemCollection::mock(),
        }
    }
}

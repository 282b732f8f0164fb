use crate::listings::error::FetchError;
use crate::models::Property;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of listings as returned by the endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub properties: Vec<Property>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl ListingPage {
    /// Validate a decoded body against the listing schema
    pub fn from_json(body: Value) -> Result<Self, FetchError> {
        if !body.is_object() {
            return Err(FetchError::Format("response is not a JSON object".into()));
        }
        if !body.get("properties").is_some_and(Value::is_array) {
            return Err(FetchError::Format("missing `properties` collection".into()));
        }
        serde_json::from_value(body).map_err(|e| FetchError::Format(e.to_string()))
    }

    /// Parse a raw body; bytes that are not JSON at all count as a network failure
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FetchError> {
        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| FetchError::Network(format!("invalid JSON body: {}", e)))?;
        Self::from_json(body)
    }
}

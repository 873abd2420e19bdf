//! Fund deposit request DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// A fund deposit request
///
/// The amount is the only field the client interprets; `metadata` is
/// forwarded to the server as-is. Every request carries a client-generated
/// reference id so the server can spot resubmissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRequest {
    pub amount: Decimal,
    pub reference: Uuid,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, JsonValue>,
}

impl FundRequest {
    /// Create a fund request with a fresh reference id
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            reference: Uuid::new_v4(),
            metadata: serde_json::Map::new(),
        }
    }

    /// Attach an opaque metadata field
    pub fn with_metadata(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

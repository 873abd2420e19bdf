//! Transaction and balance DTOs
//!
//! Server-defined shapes. The client picks out the fields it renders and
//! carries everything else in a flattened extras map, so schema drift on
//! the server never breaks deserialization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single wallet transaction as reported by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

/// Wallet balance as reported by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

/// Pull a transaction list out of a response body
///
/// Servers wrap lists inconsistently; accept a bare array or an object with
/// a `transactions` or `data` array.
pub fn transactions_from_body(body: &JsonValue) -> Vec<Transaction> {
    let items = match body {
        JsonValue::Array(items) => items.as_slice(),
        JsonValue::Object(map) => map
            .get("transactions")
            .or_else(|| map.get("data"))
            .and_then(|v| v.as_array())
            .map(|v| v.as_slice())
            .unwrap_or(&[]),
        _ => &[],
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

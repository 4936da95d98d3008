//! Raw record normalization.
//!
//! The hosted collection is loosely typed: ratings arrive as numbers or
//! strings, older records carry `restaurant_image` instead of `image`, and
//! status is free text. Everything is coerced into `FoodItem` here.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{parse_number, FoodItem, FoodStatus};

/// A record as stored on the server; unknown fields are ignored
#[derive(Debug, Default, Deserialize)]
pub struct RawFood {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub rating: Option<Value>,
    pub image: Option<Value>,
    pub restaurant_image: Option<Value>,
    pub status: Option<Value>,
    pub price: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<Value>,
}

impl RawFood {
    pub fn normalize(self) -> FoodItem {
        let image = self
            .image
            .filter(|v| !v.is_null())
            .or(self.restaurant_image)
            .as_ref()
            .and_then(text)
            .unwrap_or_default();

        FoodItem {
            id: self.id.as_ref().and_then(text),
            name: self.name.as_ref().and_then(text).unwrap_or_default(),
            rating: self.rating.as_ref().and_then(number).unwrap_or(0.0),
            image,
            status: FoodStatus::from_server(self.status.as_ref().and_then(Value::as_str)),
            price: self.price.as_ref().and_then(optional_number),
            created_at: self.created_at.as_ref().and_then(text),
        }
    }
}

/// Decode and normalize a list response body
pub fn normalize_list(body: &str) -> Result<Vec<FoodItem>, serde_json::Error> {
    let raw: Vec<RawFood> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(RawFood::normalize).collect())
}

/// Decode and normalize a single-record response body
pub fn normalize_one(body: &str) -> Result<FoodItem, serde_json::Error> {
    let raw: RawFood = serde_json::from_str(body)?;
    Ok(raw.normalize())
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

// Empty strings mean "no price", not zero
fn optional_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) if s.is_empty() => None,
        other => number(other),
    }
}

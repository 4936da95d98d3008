//! Food Entity
//!
//! The canonical in-memory shape of a catalogue record.

use serde::{Deserialize, Serialize};

/// Opening status shown on a food card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodStatus {
    #[default]
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Closed")]
    Closed,
}

impl FoodStatus {
    pub const OPEN_NOW: &'static str = "Open Now";
    pub const CLOSED: &'static str = "Closed";

    /// Convert to the wire/form literal
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::OpenNow => Self::OPEN_NOW,
            FoodStatus::Closed => Self::CLOSED,
        }
    }

    /// Strict parse: only the two exact literals are accepted
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            Self::OPEN_NOW => Some(FoodStatus::OpenNow),
            Self::CLOSED => Some(FoodStatus::Closed),
            _ => None,
        }
    }

    /// Lenient parse used for server data: anything but "Closed" is open
    pub fn from_server(s: Option<&str>) -> Self {
        match s {
            Some(Self::CLOSED) => FoodStatus::Closed,
            _ => FoodStatus::OpenNow,
        }
    }
}

impl std::fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Food record as understood by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub rating: f64,
    pub image: String,
    #[serde(default)]
    pub status: FoodStatus,
    /// `None` means the price is unknown, not zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FoodItem {
    /// Card price tag: `$8.20`, or `N/A` when unknown
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${price:.2}"),
            None => "N/A".to_string(),
        }
    }

    /// Rating with one decimal, e.g. `4.0`
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// A food record not yet persisted (body of a create request)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDraft {
    pub name: String,
    pub rating: f64,
    pub image: String,
    pub status: FoodStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FoodDraft {
    /// Attach a server id, producing the persisted entity
    pub fn into_item(self, id: impl Into<String>) -> FoodItem {
        FoodItem {
            id: Some(id.into()),
            name: self.name,
            rating: self.rating,
            image: self.image,
            status: self.status,
            price: self.price,
            created_at: self.created_at,
        }
    }
}

/// Partial update; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FoodStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<FoodDraft> for FoodPatch {
    fn from(draft: FoodDraft) -> Self {
        Self {
            name: Some(draft.name),
            rating: Some(draft.rating),
            image: Some(draft.image),
            status: Some(draft.status),
            price: draft.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_literals() {
        assert_eq!(serde_json::to_string(&FoodStatus::OpenNow).unwrap(), "\"Open Now\"");
        assert_eq!(serde_json::to_string(&FoodStatus::Closed).unwrap(), "\"Closed\"");
        assert_eq!(FoodStatus::parse("closed"), None);
        assert_eq!(FoodStatus::from_server(Some("closed")), FoodStatus::OpenNow);
        assert_eq!(FoodStatus::from_server(None), FoodStatus::OpenNow);
    }

    #[test]
    fn test_draft_omits_absent_price() {
        let draft = FoodDraft {
            name: "Sushi Set".to_string(),
            rating: 4.5,
            image: "https://example.com/sushi.jpg".to_string(),
            status: FoodStatus::OpenNow,
            price: None,
            created_at: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("price").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["status"], "Open Now");
    }

    #[test]
    fn test_card_labels() {
        let mut item = FoodDraft {
            name: "Burger".to_string(),
            rating: 4.0,
            image: String::new(),
            status: FoodStatus::OpenNow,
            price: Some(8.2),
            created_at: None,
        }
        .into_item("1");
        assert_eq!(item.price_label(), "$8.20");
        assert_eq!(item.rating_label(), "4.0");

        item.price = None;
        assert_eq!(item.price_label(), "N/A");
    }

    #[test]
    fn test_patch_sends_only_set_fields() {
        let patch = FoodPatch {
            status: Some(FoodStatus::Closed),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "status": "Closed" }));

        let full = FoodPatch::from(FoodDraft {
            name: "Burger".to_string(),
            rating: 4.2,
            image: "http://img".to_string(),
            status: FoodStatus::OpenNow,
            price: None,
            created_at: Some("2025-01-01T00:00:00Z".to_string()),
        });
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["name"], "Burger");
        assert!(json.get("price").is_none());
        assert!(json.get("createdAt").is_none());
    }
}

//! The normalized advertisement entity produced by aggregation.

use serde::{Deserialize, Serialize};

/// An ad's price as reported by the backend.
///
/// Source records carry prices as either a bare number or a display string
/// (`"2 for $5"`, `"$3.49/lb"`), so both shapes are preserved as-is rather
/// than forced through a numeric parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{n}"),
            Price::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A normalized advertisement record.
///
/// `product` and `price` are always present (defaulted to empty values when
/// the source record omitted them, never absent). The image fields record the
/// three stages of resolution: the raw filename from the source record, an
/// inline base64 payload when the backend embedded one, and the final
/// displayable data URI once resolution has run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ad {
    pub product: String,
    pub price: Price,
    /// Display name of the store this ad was fetched under.
    pub store: String,
    /// `YYYY-MM-DD` when present in the source record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    /// Resolved displayable image reference; `None` when resolution failed
    /// or no image was advertised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_deserializes_from_number() {
        let price: Price = serde_json::from_str("3.5").unwrap();
        assert_eq!(price, Price::Number(3.5));
    }

    #[test]
    fn price_deserializes_from_string() {
        let price: Price = serde_json::from_str("\"2 for $5\"").unwrap();
        assert_eq!(price, Price::Text("2 for $5".to_string()));
    }

    #[test]
    fn price_default_is_empty_text() {
        assert_eq!(Price::default(), Price::Text(String::new()));
    }

    #[test]
    fn price_display() {
        assert_eq!(Price::Number(3.5).to_string(), "3.5");
        assert_eq!(Price::Text("$1.99".to_string()).to_string(), "$1.99");
    }

    #[test]
    fn ad_serializes_without_absent_image_fields() {
        let ad = Ad {
            product: "Milk".to_string(),
            price: Price::Number(3.5),
            store: "HEB".to_string(),
            date: None,
            image_filename: None,
            image_base64: None,
            image_uri: None,
        };
        let json = serde_json::to_value(&ad).unwrap();
        assert!(json.get("image_filename").is_none());
        assert!(json.get("image_uri").is_none());
        assert_eq!(json["product"], "Milk");
        assert_eq!(json["price"], 3.5);
    }
}

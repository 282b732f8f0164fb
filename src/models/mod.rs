use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Image shown when a listing has neither a cover image nor any gallery images
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-property.jpg";

/// Listing status as reported by the marketplace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Rented,
    Sold,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Rented => "Rented",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Other => "Unlisted",
        };
        f.write_str(label)
    }
}

/// Read-only projection of a property listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: PropertyStatus,
    pub price: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area_size: Option<f64>,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Property {
    /// Cover image, falling back to the first gallery image and then the placeholder
    pub fn display_image(&self) -> &str {
        self.cover_image
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.images.iter().map(String::as_str).find(|s| !s.is_empty()))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// "Area, City" with empty parts skipped
    pub fn display_location(&self) -> String {
        [self.area.as_str(), self.city.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format a price as US currency, e.g. `$1,250,000` or `$950.50`
pub fn format_price(price: f64) -> String {
    let price = if price.is_finite() { price.max(0.0) } else { 0.0 };
    let cents = (price * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac == 0 {
        format!("${}", grouped)
    } else {
        format!("${}.{:02}", grouped, frac)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Uint(n) => n.to_string(),
    })
}

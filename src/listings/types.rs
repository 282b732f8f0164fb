use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed number of listings per page
pub const PAGE_SIZE: u32 = 6;

/// Raw filter input as typed by the user
///
/// Every field is free-form text. Blank fields, unparsable numbers and
/// unknown enum values are dropped when the outbound query is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub property_type: String,
    pub furnish_type: String,
    pub area: String,
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::Bedrooms => &self.bedrooms,
            FilterField::PropertyType => &self.property_type,
            FilterField::FurnishType => &self.furnish_type,
            FilterField::Area => &self.area,
        }
    }

    /// Set a filter field, returning whether the value changed
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
            FilterField::Bedrooms => &mut self.bedrooms,
            FilterField::PropertyType => &mut self.property_type,
            FilterField::FurnishType => &mut self.furnish_type,
            FilterField::Area => &mut self.area,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Filter fields that trigger a refetch when edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    MinPrice,
    MaxPrice,
    Bedrooms,
    PropertyType,
    FurnishType,
    Area,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::Bedrooms,
        FilterField::PropertyType,
        FilterField::FurnishType,
        FilterField::Area,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::MinPrice => "min-price",
            FilterField::MaxPrice => "max-price",
            FilterField::Bedrooms => "bedrooms",
            FilterField::PropertyType => "type",
            FilterField::FurnishType => "furnish",
            FilterField::Area => "area",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min-price" | "minprice" | "min" => Ok(FilterField::MinPrice),
            "max-price" | "maxprice" | "max" => Ok(FilterField::MaxPrice),
            "bedrooms" | "beds" => Ok(FilterField::Bedrooms),
            "type" | "property-type" => Ok(FilterField::PropertyType),
            "furnish" | "furnish-type" => Ok(FilterField::FurnishType),
            "area" => Ok(FilterField::Area),
            other => Err(format!("unknown filter field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FurnishType {
    Furnished,
    Semifurnished,
    Unfurnished,
}

impl FromStr for FurnishType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "furnished" => Ok(FurnishType::Furnished),
            "semifurnished" | "semi-furnished" => Ok(FurnishType::Semifurnished),
            "unfurnished" => Ok(FurnishType::Unfurnished),
            _ => Err(()),
        }
    }
}

/// Query parameters sent to the listing endpoint
///
/// Optional fields are skipped entirely when absent, so the endpoint never
/// sees an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnish_type: Option<FurnishType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl ListingQuery {
    pub fn build(criteria: &FilterCriteria, page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            search: non_empty(&criteria.search_text),
            min_price: parse_number(&criteria.min_price),
            max_price: parse_number(&criteria.max_price),
            bedrooms: parse_number(&criteria.bedrooms),
            property_type: criteria.property_type.parse().ok(),
            furnish_type: criteria.furnish_type.parse().ok(),
            area: non_empty(&criteria.area),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Whole numbers pass through; decimals are truncated toward zero
fn parse_number(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.abs() < i64::MAX as f64)
        .map(|n| n.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn to_json(query: &ListingQuery) -> Value {
        serde_json::to_value(query).unwrap()
    }

    #[test]
    fn empty_criteria_only_sends_paging() {
        let query = ListingQuery::build(&FilterCriteria::default(), 1, PAGE_SIZE);
        assert_eq!(to_json(&query), json!({ "page": 1, "limit": 6 }));
    }

    #[test]
    fn non_numeric_min_price_is_omitted() {
        let criteria = FilterCriteria {
            min_price: "abc".into(),
            max_price: " 500000 ".into(),
            ..Default::default()
        };
        let value = to_json(&ListingQuery::build(&criteria, 2, PAGE_SIZE));
        assert!(value.get("minPrice").is_none());
        assert_eq!(value["maxPrice"], 500000);
    }

    #[test]
    fn full_criteria_maps_to_wire_names() {
        let criteria = FilterCriteria {
            search_text: "lake house".into(),
            min_price: "100000".into(),
            max_price: "900000".into(),
            bedrooms: "3".into(),
            property_type: "Condo".into(),
            furnish_type: "semifurnished".into(),
            area: "Downtown".into(),
        };
        let value = to_json(&ListingQuery::build(&criteria, 4, PAGE_SIZE));
        assert_eq!(
            value,
            json!({
                "page": 4,
                "limit": 6,
                "search": "lake house",
                "minPrice": 100000,
                "maxPrice": 900000,
                "bedrooms": 3,
                "propertyType": "condo",
                "furnishType": "semifurnished",
                "area": "Downtown"
            })
        );
    }

    #[test]
    fn blank_and_unknown_values_never_serialize() {
        let criteria = FilterCriteria {
            search_text: "   ".into(),
            property_type: "castle".into(),
            furnish_type: "".into(),
            area: "\t".into(),
            bedrooms: "two".into(),
            ..Default::default()
        };
        let value = to_json(&ListingQuery::build(&criteria, 1, PAGE_SIZE));
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        for v in obj.values() {
            assert_ne!(v, &json!(""));
            assert!(!v.is_null());
        }
    }

    #[test]
    fn decimal_numbers_truncate() {
        assert_eq!(parse_number("2.9"), Some(2));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn page_zero_is_clamped() {
        assert_eq!(ListingQuery::build(&FilterCriteria::default(), 0, PAGE_SIZE).page, 1);
    }

    #[test]
    fn set_reports_changes() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.set(FilterField::Area, "Uptown"));
        assert!(!criteria.set(FilterField::Area, "Uptown"));
        assert_eq!(criteria.get(FilterField::Area), "Uptown");
        assert!(!criteria.is_empty());
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("min-price".parse::<FilterField>(), Ok(FilterField::MinPrice));
        assert_eq!("TYPE".parse::<FilterField>(), Ok(FilterField::PropertyType));
        assert!("colour".parse::<FilterField>().is_err());
    }
}

// src/domain/listing.rs

use std::fmt;

pub const PROPERTY_TYPES: &[&str] = &["House", "Flat", "Plot", "Commercial"];
pub const CONSTRUCTION_STATUSES: &[&str] = &["Ready to move", "Under construction"];
pub const CURRENCIES: &[&str] = &["USD", "PKR"];
pub const AREA_UNITS: &[&str] = &["sq ft", "marla", "kanal"];

/// Whether a browse view shows buyer leads or seller offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Buyer,
    Seller,
}

impl ListingKind {
    pub fn label(self) -> &'static str {
        match self {
            ListingKind::Buyer => "Buyer",
            ListingKind::Seller => "Seller",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    House,
    Flat,
    Plot,
    Commercial,
    /// Text from the remote source that isn't one of the known options.
    Other(String),
}

impl PropertyType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "House" => PropertyType::House,
            "Flat" => PropertyType::Flat,
            "Plot" => PropertyType::Plot,
            "Commercial" => PropertyType::Commercial,
            other => PropertyType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::House => "House",
            PropertyType::Flat => "Flat",
            PropertyType::Plot => "Plot",
            PropertyType::Commercial => "Commercial",
            PropertyType::Other(s) => s,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionStatus {
    ReadyToMove,
    UnderConstruction,
    Other(String),
}

impl ConstructionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Ready to move" => ConstructionStatus::ReadyToMove,
            "Under construction" => ConstructionStatus::UnderConstruction,
            other => ConstructionStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConstructionStatus::ReadyToMove => "Ready to move",
            ConstructionStatus::UnderConstruction => "Under construction",
            ConstructionStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ConstructionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A buyer or seller intake record as the filter engine sees it.
///
/// Every field is optional: the remote source is not schema-enforced, and an
/// absent field means "no value" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    /// Composite like "250,001 - 500,000 USD"; currency is the trailing token.
    pub price_range: Option<String>,
    pub property_type: Option<PropertyType>,
    /// Composite like "1200 sq ft"; unit is the trailing token.
    pub area: Option<String>,
    pub construction_status: Option<ConstructionStatus>,
    pub image_url: Option<String>,
}

impl ListingRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    /// Splits `price_range` into (bracket, currency). Falls back to USD when no
    /// known currency suffix is present.
    pub fn price_parts(&self) -> (String, &'static str) {
        split_trailing_token(self.price_range.as_deref().unwrap_or(""), CURRENCIES, "USD")
    }

    /// Splits `area` into (value, unit). Falls back to "sq ft".
    pub fn area_parts(&self) -> (String, &'static str) {
        split_trailing_token(self.area.as_deref().unwrap_or(""), AREA_UNITS, "sq ft")
    }
}

/// Peel a known trailing token ("USD", "marla", ...) off a composite field.
/// Returns the remaining text (trimmed) and the token, or the whole text and
/// `fallback` if no known token ends the string.
pub fn split_trailing_token(
    value: &str,
    tokens: &[&'static str],
    fallback: &'static str,
) -> (String, &'static str) {
    let value = value.trim();
    for token in tokens {
        if let Some(head) = value.strip_suffix(token) {
            return (head.trim().to_string(), token);
        }
    }
    (value.to_string(), fallback)
}

/// Join a value and its unit/currency the way the intake forms submit them.
pub fn join_composite(value: &str, token: &str) -> String {
    format!("{} {}", value.trim(), token.trim())
}

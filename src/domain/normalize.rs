// src/domain/normalize.rs

use crate::domain::listing::{ConstructionStatus, ListingRecord, PropertyType};
use serde_json::Value;

/// Outcome of normalizing a listing payload from the webhook backend.
#[derive(Debug, PartialEq)]
pub enum Normalized {
    Records(Vec<ListingRecord>),
    /// The body was not a JSON array. Callers treat this as "no records".
    UnexpectedFormat,
}

/// Flatten the raw webhook payload into typed records.
/// This is the only place that knows about the remote field names; the filter
/// engine never sees raw JSON.
///
/// Items may be flat objects or wrap the object under a `json` key.
pub fn normalize_listings(payload: &Value) -> Normalized {
    let Some(items) = payload.as_array() else {
        return Normalized::UnexpectedFormat;
    };

    let records = items
        .iter()
        .map(|item| match item.get("json") {
            Some(inner) if inner.is_object() => inner,
            _ => item,
        })
        .filter(|obj| obj.is_object())
        .map(record_from_object)
        .collect();

    Normalized::Records(records)
}

fn record_from_object(obj: &Value) -> ListingRecord {
    ListingRecord {
        id: text_field(obj, &["id", "ID", "row_number"]),
        name: text_field(obj, &["Name", "name"]),
        email: text_field(obj, &["Email", "email"]),
        phone_number: text_field(obj, &["Phone_Number", "phoneNumber", "phone"]),
        location: text_field(obj, &["Location_", "Location", "location"]),
        price_range: text_field(obj, &["Price_Range", "priceRange"]),
        property_type: text_field(obj, &["Property_Type", "propertyType"])
            .map(|s| PropertyType::parse(&s)),
        area: text_field(obj, &["Area", "area"]),
        construction_status: text_field(obj, &["Construction_Status", "constructionStatus"])
            .map(|s| ConstructionStatus::parse(&s)),
        image_url: text_field(obj, &["Image", "image", "imageUrl"]),
    }
}

/// First key that holds a non-empty string (or a number, rendered as text).
fn text_field(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

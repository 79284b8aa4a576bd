// src/domain/filter.rs
//
// All active criteria are AND-combined. Pure logic: no I/O.

use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::ListingRecord;

/// Case-insensitive containment; an absent field behaves like "".
fn contains_ci(field: Option<&str>, needle_lower: &str) -> bool {
    needle_lower.is_empty() || field.unwrap_or("").to_lowercase().contains(needle_lower)
}

/// True when every non-empty criterion matches the record.
pub fn matches(record: &ListingRecord, criteria: &FilterCriteria) -> bool {
    let location = criteria.location().to_lowercase();
    let currency = criteria.price_currency().to_lowercase();
    let area_value = criteria.area_value().to_lowercase();
    let area_unit = criteria.area_unit().to_lowercase();

    let price = record.price_range.as_deref();
    let area = record.area.as_deref();

    let location_match = contains_ci(record.location.as_deref(), &location);

    // The bracket label is a literal, case-sensitive substring, never parsed.
    let label = criteria.price_range_label();
    let price_match = (label.is_empty() || price.unwrap_or("").contains(label))
        && contains_ci(price, &currency);

    let type_match = criteria.property_type().is_empty()
        || record
            .property_type
            .as_ref()
            .is_some_and(|t| t.as_str() == criteria.property_type());

    let area_match = contains_ci(area, &area_value) && contains_ci(area, &area_unit);

    let status_match = criteria.construction_status().is_empty()
        || record
            .construction_status
            .as_ref()
            .is_some_and(|s| s.as_str() == criteria.construction_status());

    location_match && price_match && type_match && area_match && status_match
}

/// Keep matching records in input order, borrowing rather than cloning.
pub fn filter_records<'a>(
    records: &'a [ListingRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ListingRecord> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(r, criteria)).collect()
}

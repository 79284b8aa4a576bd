// src/domain/criteria.rs

use std::collections::HashMap;

pub const USD_PRICE_RANGES: &[&str] = &[
    "50,000 - 100,000",
    "100,001 - 250,000",
    "250,001 - 500,000",
    "500,001 - 1,000,000",
    "1,000,001+",
];

pub const PKR_PRICE_RANGES: &[&str] = &[
    "1,000,000 - 5,000,000",
    "5,000,001 - 10,000,000",
    "10,000,001 - 25,000,000",
    "25,000,001 - 50,000,000",
    "50,000,001+",
];

/// Bracket labels offered for a currency. Anything but PKR gets the USD list.
pub fn price_ranges_for(currency: &str) -> &'static [&'static str] {
    if currency == "PKR" {
        PKR_PRICE_RANGES
    } else {
        USD_PRICE_RANGES
    }
}

/// Filter values chosen in one browse view. Empty string = unset (wildcard).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    location: String,
    price_range_label: String,
    price_currency: String,
    property_type: String,
    area_value: String,
    area_unit: String,
    construction_status: String,
}

/// Select controls send "all" for the catch-all option.
fn select_value(value: &str) -> String {
    if value == "all" {
        String::new()
    } else {
        value.to_string()
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn price_range_label(&self) -> &str {
        &self.price_range_label
    }
    pub fn price_currency(&self) -> &str {
        &self.price_currency
    }
    pub fn property_type(&self) -> &str {
        &self.property_type
    }
    pub fn area_value(&self) -> &str {
        &self.area_value
    }
    pub fn area_unit(&self) -> &str {
        &self.area_unit
    }
    pub fn construction_status(&self) -> &str {
        &self.construction_status
    }

    pub fn set_location(&mut self, value: &str) {
        self.location = value.to_string();
    }

    pub fn set_price_range_label(&mut self, value: &str) {
        self.price_range_label = select_value(value);
    }

    /// Changing the currency drops the chosen bracket: labels from the other
    /// currency's list would never match.
    pub fn set_price_currency(&mut self, value: &str) {
        let value = select_value(value);
        if value != self.price_currency {
            self.price_range_label.clear();
        }
        self.price_currency = value;
    }

    pub fn set_property_type(&mut self, value: &str) {
        self.property_type = select_value(value);
    }

    pub fn set_area_value(&mut self, value: &str) {
        self.area_value = value.to_string();
    }

    pub fn set_area_unit(&mut self, value: &str) {
        self.area_unit = select_value(value);
    }

    pub fn set_construction_status(&mut self, value: &str) {
        self.construction_status = select_value(value);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Bracket list the price select should offer right now.
    pub fn price_range_options(&self) -> &'static [&'static str] {
        price_ranges_for(&self.price_currency)
    }

    /// Rebuild criteria from a submitted filter form or a shared link.
    ///
    /// A bracket is kept only when it belongs to the submitted currency's
    /// list. A label left over from the other currency is dropped, as an
    /// in-place currency switch would drop it.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let get = |k: &str| params.get(k).map(String::as_str).unwrap_or("");

        let mut criteria = Self::new();
        criteria.set_location(get("location"));
        criteria.set_price_currency(get("currency"));
        let label = get("price");
        if criteria.price_range_options().contains(&label) {
            criteria.set_price_range_label(label);
        }
        criteria.set_property_type(get("type"));
        criteria.set_area_value(get("area"));
        criteria.set_area_unit(get("unit"));
        criteria.set_construction_status(get("status"));
        criteria
    }

    /// True when the form was rendered with `applied_currency`'s brackets,
    /// the currency then changed to one with a different list, and the
    /// submitted bracket had to be dropped.
    pub fn bracket_reset_by_query(params: &HashMap<String, String>) -> bool {
        let get = |k: &str| select_value(params.get(k).map(String::as_str).unwrap_or(""));
        let (applied, currency, label) = (get("applied_currency"), get("currency"), get("price"));
        !label.is_empty()
            && price_ranges_for(&applied) != price_ranges_for(&currency)
            && !price_ranges_for(&currency).contains(&label.as_str())
    }

    /// Non-empty fields as query pairs, in form order. Used for export links.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("location", self.location.as_str()),
            ("price", self.price_range_label.as_str()),
            ("currency", self.price_currency.as_str()),
            ("applied_currency", self.price_currency.as_str()),
            ("type", self.property_type.as_str()),
            ("area", self.area_value.as_str()),
            ("unit", self.area_unit.as_str()),
            ("status", self.construction_status.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

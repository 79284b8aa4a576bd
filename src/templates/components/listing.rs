use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::{
    ListingKind, ListingRecord, AREA_UNITS, CONSTRUCTION_STATUSES, CURRENCIES, PROPERTY_TYPES,
};
use maud::{html, Markup};

fn or_dash(v: Option<&str>) -> &str {
    v.filter(|s| !s.is_empty()).unwrap_or("—")
}

/// Only inline data URLs and http(s) links are rendered as images.
pub fn image_src(record: &ListingRecord) -> Option<&str> {
    record
        .image_url
        .as_deref()
        .filter(|u| u.starts_with("https://") || u.starts_with("http://") || u.starts_with("data:image/"))
}

pub fn listing_card(record: &ListingRecord, kind: ListingKind) -> Markup {
    html! {
        article class="card listing-card" {
            @if let Some(src) = image_src(record) {
                img src=(src) alt=(record.display_name()) loading="lazy";
            }
            h3 { (record.display_name()) }
            dl {
                dt { "Location" } dd { (or_dash(record.location.as_deref())) }
                dt { "Price" } dd { (or_dash(record.price_range.as_deref())) }
                dt { "Type" } dd { (or_dash(record.property_type.as_ref().map(|t| t.as_str()))) }
                dt { "Area" } dd { (or_dash(record.area.as_deref())) }
                dt { "Status" } dd { (or_dash(record.construction_status.as_ref().map(|s| s.as_str()))) }
            }
            @if let Some(id) = record.id.as_deref() {
                @if kind == ListingKind::Seller {
                    a class="btn" href=(format!("/listings/details?id={}", encode(id))) { "View details" }
                }
            }
        }
    }
}

/// Filter bar. Submits as GET to `action`; the hidden `applied_currency`
/// records which bracket list was on screen, so a currency switch that drops
/// the chosen bracket can be reported.
pub fn filter_form(action: &str, criteria: &FilterCriteria) -> Markup {
    html! {
        form class="filters" method="get" action=(action) {
            input type="hidden" name="applied_currency" value=(criteria.price_currency());

            div class="field" {
                label for="location" { "Location" }
                input type="text" id="location" name="location" value=(criteria.location()) placeholder="e.g. Multan";
            }

            div class="field" {
                label for="currency" { "Currency" }
                select id="currency" name="currency" {
                    option value="all" selected[criteria.price_currency().is_empty()] { "Any currency" }
                    @for c in CURRENCIES {
                        option value=(c) selected[*c == criteria.price_currency()] { (c) }
                    }
                }
            }

            div class="field" {
                label for="price" { "Price range" }
                select id="price" name="price" {
                    option value="all" selected[criteria.price_range_label().is_empty()] { "Any price" }
                    @for r in criteria.price_range_options() {
                        option value=(r) selected[*r == criteria.price_range_label()] { (r) }
                    }
                }
            }

            div class="field" {
                label for="type" { "Property type" }
                select id="type" name="type" {
                    option value="all" selected[criteria.property_type().is_empty()] { "Any type" }
                    @for t in PROPERTY_TYPES {
                        option value=(t) selected[*t == criteria.property_type()] { (t) }
                    }
                }
            }

            div class="field" {
                label for="area" { "Area" }
                input type="text" id="area" name="area" value=(criteria.area_value()) placeholder="e.g. 10";
            }

            div class="field" {
                label for="unit" { "Unit" }
                select id="unit" name="unit" {
                    option value="all" selected[criteria.area_unit().is_empty()] { "Any unit" }
                    @for u in AREA_UNITS {
                        option value=(u) selected[*u == criteria.area_unit()] { (u) }
                    }
                }
            }

            div class="field" {
                label for="status" { "Status" }
                select id="status" name="status" {
                    option value="all" selected[criteria.construction_status().is_empty()] { "Any status" }
                    @for s in CONSTRUCTION_STATUSES {
                        option value=(s) selected[*s == criteria.construction_status()] { (s) }
                    }
                }
            }

            div class="actions" {
                button type="submit" { "Apply filters" }
                @if !criteria.is_empty() {
                    a href=(action) class="link" { "Clear filters" }
                }
            }
        }
    }
}

pub fn encode(v: &str) -> String {
    url::form_urlencoded::byte_serialize(v.as_bytes()).collect()
}

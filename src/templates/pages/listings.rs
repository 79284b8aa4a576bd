use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::{ListingKind, ListingRecord};
use crate::templates::components::listing::{encode, image_src};
use crate::templates::components::{filter_form, listing_card, notice, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct BrowseVm<'a> {
    pub kind: ListingKind,
    /// Path the filter form submits to.
    pub action: &'a str,
    pub criteria: &'a FilterCriteria,
    /// `None` only before the feed's first completed fetch. A failed fetch
    /// arrives as an empty list plus an error flash.
    pub records: Option<&'a [ListingRecord]>,
    pub total: Option<usize>,
    pub flash: Option<(NoticeKind, &'a str)>,
    pub export_href: Option<String>,
}

pub fn browse_page(chrome: &Chrome, vm: &BrowseVm) -> Markup {
    let title = match vm.kind {
        ListingKind::Seller => "Seller Listings",
        ListingKind::Buyer => "Buyer Listings",
    };
    desktop_layout(
        title,
        chrome,
        html! {
            section class="container" {
                h1 { (title) }
                @if let Some((kind, msg)) = vm.flash { (notice(kind, msg)) }

                (filter_form(vm.action, vm.criteria))

                @match vm.records {
                    None => p class="empty" { "Listings are unavailable right now." },
                    Some(records) => {
                        div class="toolbar" {
                            p class="count" {
                                "Showing " (records.len()) " of " (vm.total.unwrap_or(records.len()))
                            }
                            @if let Some(href) = &vm.export_href {
                                a class="btn" href=(href) { "Download XLSX" }
                            }
                        }
                        @if records.is_empty() {
                            p class="empty" { "No listings match your criteria." }
                        } @else {
                            div class="grid listings" {
                                @for record in records {
                                    (listing_card(record, vm.kind))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn listing_details_page(
    chrome: &Chrome,
    record: &ListingRecord,
    can_edit: bool,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let location = record.location.as_deref().unwrap_or("");
    let map_src = format!(
        "https://maps.google.com/maps?q={}&t=&z=13&ie=UTF8&iwloc=&output=embed",
        encode(location)
    );
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".into());

    desktop_layout(
        record.display_name(),
        chrome,
        html! {
            section class="container details" {
                a href="/listings" class="back" { "← Back to listings" }
                @if let Some((kind, msg)) = flash { (notice(kind, msg)) }
                h1 { (record.display_name()) }

                @if let Some(src) = image_src(record) {
                    img class="hero-image" src=(src) alt=(record.display_name());
                }

                dl {
                    dt { "Email" } dd { (text(&record.email)) }
                    dt { "Phone" } dd { (text(&record.phone_number)) }
                    dt { "Location" } dd { (text(&record.location)) }
                    dt { "Price Range" } dd { (text(&record.price_range)) }
                    dt { "Property Type" } dd { (record.property_type.as_ref().map(|t| t.as_str()).unwrap_or("—")) }
                    dt { "Area" } dd { (text(&record.area)) }
                    dt { "Construction Status" } dd { (record.construction_status.as_ref().map(|s| s.as_str()).unwrap_or("—")) }
                }

                @if !location.is_empty() {
                    iframe class="map" title="Map" src=(map_src) loading="lazy" width="100%" height="320" {}
                }

                @if can_edit {
                    @if let Some(id) = record.id.as_deref() {
                        a class="btn primary" href=(format!("/listings/edit?id={}", encode(id))) { "Edit listing" }
                    }
                }
            }
        },
    )
}

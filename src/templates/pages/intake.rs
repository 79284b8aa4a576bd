// Buyer/seller intake and listing edit forms, plus the shared preview step.

use crate::domain::criteria::price_ranges_for;
use crate::domain::listing::{AREA_UNITS, CONSTRUCTION_STATUSES, CURRENCIES, PROPERTY_TYPES};
use crate::forms::listing_forms::LISTING_FIELDS;
use crate::forms::{FormData, FormErrors};
use crate::templates::components::{hidden_fields, notice, Field, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use crate::webhooks::models::ListingPayload;
use maud::{html, Markup};

pub fn buyer_form_page(
    chrome: &Chrome,
    form: &FormData,
    errors: &FormErrors,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    desktop_layout(
        "Add Buyer",
        chrome,
        html! {
            section class="container narrow" {
                a href="/dashboard" class="back" { "← Back to dashboard" }
                h1 { "Add Buyer" }
                p class="lead" { "Fill in the buyer's details and what they are looking for." }
                @if let Some((kind, msg)) = flash { (notice(kind, msg)) }

                form method="post" action="/dashboard/add-buyer" class="card" {
                    (contact_fields(&f))
                    (f.input("Price Range", "price_range", "text", "e.g. 50 lakh - 1 crore"))
                    (f.select("Property Type", "property_type", PROPERTY_TYPES, None))
                    (f.input("Area", "area", "text", "e.g. 10 marla"))
                    (f.select("Construction Status", "construction_status", CONSTRUCTION_STATUSES, None))
                    button type="submit" class="primary" { "Preview" }
                }
            }
        },
    )
}

pub fn seller_form_page(
    chrome: &Chrome,
    form: &FormData,
    errors: &FormErrors,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    desktop_layout(
        "Add Seller",
        chrome,
        html! {
            section class="container narrow" {
                a href="/dashboard" class="back" { "← Back to dashboard" }
                h1 { "Add Seller" }
                p class="lead" { "List a property for sale." }
                @if let Some((kind, msg)) = flash { (notice(kind, msg)) }

                form method="post" action="/dashboard/add-seller" enctype="multipart/form-data" class="card" {
                    (contact_fields(&f))
                    (priced_fields(&f, form))
                    (image_fields(&f, form))
                    button type="submit" class="primary" { "Preview" }
                }
            }
        },
    )
}

pub fn edit_listing_page(
    chrome: &Chrome,
    form: &FormData,
    errors: &FormErrors,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    let id = form.get("id");
    let action = format!(
        "/listings/edit?id={}",
        crate::templates::components::listing::encode(id)
    );
    desktop_layout(
        "Edit Listing",
        chrome,
        html! {
            section class="container narrow" {
                a href=(format!("/listings/details?id={}", crate::templates::components::listing::encode(id))) class="back" { "← Back to listing" }
                h1 { "Edit Listing" }
                @if let Some((kind, msg)) = flash { (notice(kind, msg)) }

                form method="post" action=(action) class="card" {
                    input type="hidden" name="id" value=(id);
                    (contact_fields(&f))
                    (priced_fields(&f, form))
                    button type="submit" class="primary" { "Preview changes" }
                }
            }
        },
    )
}

fn contact_fields(f: &Field) -> Markup {
    html! {
        (f.input("Name", "name", "text", "Full name"))
        (f.input("Email", "email", "email", "name@example.com"))
        (f.input("Phone Number", "phone_number", "tel", "0300 1234567"))
        (f.input("Location", "location", "text", "e.g. DHA Phase 5, Lahore"))
    }
}

/// Currency, bracket, area value and unit. Brackets follow the currency the
/// form was rendered with; "Update price ranges" re-renders after a switch.
fn priced_fields(f: &Field, form: &FormData) -> Markup {
    let currency = match form.get("price_currency") {
        "" => "USD",
        c => c,
    };
    html! {
        input type="hidden" name="applied_currency" value=(currency);
        (f.select("Currency", "price_currency", CURRENCIES, None))
        button type="submit" name="refresh" value="1" class="link" { "Update price ranges" }
        (f.select("Price Range", "price_range", price_ranges_for(currency), None))
        (f.select("Property Type", "property_type", PROPERTY_TYPES, None))
        (f.input("Area", "area", "text", "e.g. 1200"))
        (f.select("Area Unit", "area_unit", AREA_UNITS, None))
        (f.select("Construction Status", "construction_status", CONSTRUCTION_STATUSES, None))
    }
}

/// Optional property image: a file (max 5MB) or a link. An image uploaded
/// earlier rides along hidden so a re-render doesn't lose it.
fn image_fields(f: &Field, form: &FormData) -> Markup {
    let uploaded = form.get("image_url").starts_with("data:");
    html! {
        div class="field" {
            label for="image_file" { "Property Image (optional, max 5MB)" }
            input type="file" id="image_file" name="image_file" accept="image/*";
            @if uploaded {
                input type="hidden" name="image_url" value=(form.get("image_url"));
                p class="hint" { "An image is attached. Choose another file to replace it." }
            }
            (f.error("image_url"))
        }
        @if !uploaded {
            div class="field" {
                label for="image_url" { "Or image URL" }
                input type="url" id="image_url" name="image_url" value=(form.get("image_url")) placeholder="https://…";
            }
        }
    }
}

/// Rows shown in the confirmation step.
pub fn payload_rows(p: &ListingPayload) -> Vec<(&'static str, String)> {
    vec![
        ("Name", p.name.clone()),
        ("Email", p.email.clone()),
        ("Phone Number", p.phone_number.clone()),
        ("Location", p.location.clone()),
        ("Price Range", p.price_range.clone()),
        ("Property Type", p.property_type.clone()),
        ("Area", p.area.clone()),
        ("Construction Status", p.construction_status.clone()),
    ]
}

pub struct Preview<'a> {
    pub title: &'a str,
    pub action: &'a str,
    pub rows: Vec<(&'static str, String)>,
    pub image: Option<&'a str>,
    /// Raw submitted form, re-posted with `confirm=1`.
    pub form: &'a FormData,
}

pub fn preview_page(chrome: &Chrome, p: &Preview) -> Markup {
    desktop_layout(
        p.title,
        chrome,
        html! {
            section class="container narrow" {
                h1 { (p.title) }
                p class="lead" { "Please review the details below before submitting." }
                div class="card preview" {
                    @if let Some(src) = p.image {
                        img src=(src) alt="Property image";
                    }
                    dl {
                        @for (label, value) in &p.rows {
                            dt { (label) }
                            dd { (value) }
                        }
                    }
                }
                div class="actions" {
                    form method="post" action=(p.action) {
                        (hidden_fields(p.form, LISTING_FIELDS))
                        input type="hidden" name="edit" value="1";
                        button type="submit" class="link" { "Edit" }
                    }
                    form method="post" action=(p.action) {
                        (hidden_fields(p.form, LISTING_FIELDS))
                        input type="hidden" name="confirm" value="1";
                        button type="submit" class="primary" { "Confirm & Submit" }
                    }
                }
            }
        },
    )
}

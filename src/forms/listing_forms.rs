// listing_forms.rs
use crate::domain::criteria::price_ranges_for;
use crate::domain::listing::{
    join_composite, ListingRecord, AREA_UNITS, CONSTRUCTION_STATUSES, CURRENCIES, PROPERTY_TYPES,
};
use crate::forms::{FormData, FormErrors};
use crate::webhooks::models::{EditListingPayload, ListingPayload, PricePromptPayload, SellerPayload};
use base64::Engine;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Field names shared by every listing form, in render order.
pub const LISTING_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone_number",
    "location",
    "price_range",
    "price_currency",
    "property_type",
    "area",
    "area_unit",
    "construction_status",
    "image_url",
    "id",
];

fn common(errors: &mut FormErrors, form: &FormData) -> ListingPayload {
    ListingPayload {
        name: errors.require(form, "name", "Name is required"),
        email: errors.email(form, "email"),
        phone_number: errors.require(form, "phone_number", "Phone number is required"),
        location: errors.require(form, "location", "Location is required"),
        price_range: errors.require(form, "price_range", "Price range is required"),
        property_type: errors.one_of(form, "property_type", PROPERTY_TYPES, "Select a property type"),
        area: errors.require(form, "area", "Area is required"),
        construction_status: errors.one_of(
            form,
            "construction_status",
            CONSTRUCTION_STATUSES,
            "Select a construction status",
        ),
    }
}

/// Buyers describe what they want in free text; nothing is joined.
pub fn validate_buyer(form: &FormData) -> Result<ListingPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let listing = common(&mut errors, form);
    errors.finish(listing)
}

/// Seller and edit forms pick a bracket for a currency and an area with a
/// unit. Both are joined into the composite strings the backend stores.
fn priced(errors: &mut FormErrors, form: &FormData) -> ListingPayload {
    let mut listing = common(errors, form);

    let currency = errors.one_of(form, "price_currency", CURRENCIES, "Select a currency");
    if !listing.price_range.is_empty()
        && CURRENCIES.contains(&currency.as_str())
        && !price_ranges_for(&currency).contains(&listing.price_range.as_str())
    {
        errors.add("price_range", "Select a price range for the chosen currency");
    }
    let unit = errors.one_of(form, "area_unit", AREA_UNITS, "Select an area unit");

    listing.price_range = join_composite(&listing.price_range, &currency);
    listing.area = join_composite(&listing.area, &unit);
    listing
}

/// A chosen image file replaces any pasted image URL. The upload arrives as a
/// data URL under `image_file` and travels on as `image_url`.
pub fn take_uploaded_image(form: &mut FormData) {
    if form.is_set("image_file") {
        let data = form.get("image_file").to_string();
        form.set("image_url", data);
        form.set("image_file", "");
    }
}

pub fn validate_seller(form: &FormData) -> Result<SellerPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let listing = priced(&mut errors, form);

    let image = form.trimmed("image_url");
    let image = if image.is_empty() {
        None
    } else {
        if let Err(msg) = check_image(&image) {
            errors.add("image_url", msg);
        }
        Some(image)
    };

    errors.finish(SellerPayload { listing, image })
}

pub fn validate_edit(form: &FormData) -> Result<EditListingPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let listing = priced(&mut errors, form);
    let id = errors.require(form, "id", "Listing id is missing");
    errors.finish(EditListingPayload { listing, id })
}

pub fn validate_price_prompt(form: &FormData) -> Result<PricePromptPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let prompt = errors.require(form, "prompt", "This field is required.");
    errors.finish(PricePromptPayload { prompt })
}

/// Accepts http(s) links and inline `data:image/...;base64,` URLs up to
/// `MAX_IMAGE_BYTES` of decoded data.
fn check_image(value: &str) -> Result<(), &'static str> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return url::Url::parse(value)
            .map(|_| ())
            .map_err(|_| "Image must be a valid URL");
    }

    let Some(rest) = value.strip_prefix("data:image/") else {
        return Err("Image must be an http(s) URL or an image data URL");
    };
    let Some((_, data)) = rest.split_once(";base64,") else {
        return Err("Image data URL must be base64 encoded");
    };

    // Decoded size is about 3/4 of the encoded length; reject before decoding.
    if data.len() / 4 * 3 > MAX_IMAGE_BYTES + 3 {
        return Err("Image size cannot exceed 5MB.");
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|_| "Image data is not valid base64")?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("Image size cannot exceed 5MB.");
    }
    Ok(())
}

/// Prefill for the edit form: composite price/area are split back into
/// bracket + currency and value + unit.
pub fn edit_form_from_record(record: &ListingRecord) -> FormData {
    let (price, currency) = record.price_parts();
    let (area, unit) = record.area_parts();
    let text = |v: &Option<String>| v.clone().unwrap_or_default();

    let mut form = FormData::default();
    form.set("id", text(&record.id));
    form.set("name", text(&record.name));
    form.set("email", text(&record.email));
    form.set("phone_number", text(&record.phone_number));
    form.set("location", text(&record.location));
    form.set("price_range", price);
    form.set("price_currency", currency);
    form.set(
        "property_type",
        record
            .property_type
            .as_ref()
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| "House".into()),
    );
    form.set("area", area);
    form.set("area_unit", unit);
    form.set(
        "construction_status",
        record
            .construction_status
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "Ready to move".into()),
    );
    form
}

use crate::tests::utils::*;
use crate::webhooks::client::Endpoint;
use serde_json::{json, Value};

fn sellers() -> Value {
    json!([
        { "json": {
            "id": 1, "Name": "Canal View House", "Location_": "Multan Cantt",
            "Price_Range": "10,000,001 - 25,000,000 PKR", "Property_Type": "House",
            "Area": "10 marla", "Construction_Status": "Ready to move"
        }},
        { "json": {
            "id": 2, "Name": "Gulberg Flat", "Location_": "Gulberg, Lahore",
            "Price_Range": "100,001 - 250,000 USD", "Property_Type": "Flat",
            "Area": "1200 sq ft", "Construction_Status": "Under construction"
        }},
        { "json": {
            "id": 3, "Name": "DHA Plot", "Location_": "DHA Phase 6, Lahore",
            "Price_Range": "25,000,001 - 50,000,000 PKR", "Property_Type": "Plot",
            "Area": "1 kanal", "Construction_Status": "Ready to move"
        }}
    ])
}

#[test]
fn sellers_browse_is_public_and_lists_everything() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));

    let resp = respond(get("/listings", None), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Canal View House"));
    assert!(body.contains("Gulberg Flat"));
    assert!(body.contains("DHA Plot"));
    assert!(body.contains("Showing 3 of 3"));
    // Export is for signed-in users only.
    assert!(!body.contains("Download XLSX"));
}

#[test]
fn filters_are_and_combined() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));

    let body = body_string(respond(get("/listings?location=lahore&currency=PKR", None), &app));
    assert!(body.contains("DHA Plot"));
    assert!(!body.contains("Gulberg Flat"));
    assert!(!body.contains("Canal View House"));
    assert!(body.contains("Showing 1 of 3"));

    let body = body_string(respond(get("/listings?type=Flat&unit=sq+ft", None), &app));
    assert!(body.contains("Gulberg Flat"));
    assert!(body.contains("Showing 1 of 3"));
}

#[test]
fn no_match_is_distinct_from_not_loaded() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));
    let body = body_string(respond(get("/listings?location=karachi", None), &app));
    assert!(body.contains("No listings match your criteria."));
    assert!(body.contains("Showing 0 of 3"));
}

#[test]
fn currency_switch_drops_stale_bracket() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));
    // The USD bracket was chosen while USD was applied; switching to PKR drops it.
    let body = body_string(respond(
        get(
            "/listings?applied_currency=USD&currency=PKR&price=100%2C001+-+250%2C000",
            None,
        ),
        &app,
    ));
    assert!(body.contains("Showing 2 of 3"));
    assert!(body.contains("Canal View House"));
    assert!(body.contains("DHA Plot"));
    assert!(body.contains("Currency changed. Please pick a price range again."));
}

#[test]
fn bracket_picked_with_currency_on_fresh_form_is_kept() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));
    // The first page load renders the USD list with no currency applied yet.
    let body = body_string(respond(
        get("/listings?applied_currency=&currency=USD&price=100%2C001+-+250%2C000", None),
        &app,
    ));
    assert!(body.contains("Showing 1 of 3"));
    assert!(body.contains("Gulberg Flat"));
    assert!(!body.contains("Currency changed"));
}

#[test]
fn shared_link_keeps_matching_bracket() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));
    let body = body_string(respond(
        get("/listings?currency=PKR&price=25%2C000%2C001+-+50%2C000%2C000", None),
        &app,
    ));
    assert!(body.contains("Showing 1 of 3"));
    assert!(body.contains("DHA Plot"));
}

#[test]
fn unexpected_format_shows_error_and_empty_list() {
    let app = test_app(
        StubBackend::new().reply(Endpoint::GetSellers, json!({ "message": "Workflow was started" })),
    );
    let body = body_string(respond(get("/listings", None), &app));
    assert!(body.contains("Unexpected format: Could not parse listings from the server."));
    assert!(body.contains("Showing 0 of 0"));
}

#[test]
fn fetch_failure_shows_error() {
    let app = test_app(StubBackend::new().fail(Endpoint::GetSellers, "Service unavailable"));
    let body = body_string(respond(get("/listings", None), &app));
    assert!(body.contains("Failed to fetch listings: Service unavailable"));
}

#[test]
fn empty_result_is_an_info_notice() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, json!([])));
    let body = body_string(respond(get("/listings", None), &app));
    assert!(body.contains("No listings found"));
}

#[test]
fn buyers_browse_needs_login_and_uses_buyer_endpoint() {
    let backend = StubBackend::new().reply(
        Endpoint::GetBuyers,
        json!([{ "Name": "Hamza", "Location_": "Multan", "Price_Range": "50 lakh" }]),
    );
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let body = body_string(respond(get("/dashboard/buyers", Some(&cookie)), &app));
    assert!(body.contains("Buyer Listings"));
    assert!(body.contains("Hamza"));
    assert_eq!(calls_to(&log, Endpoint::GetBuyers).len(), 1);
    assert!(calls_to(&log, Endpoint::GetSellers).is_empty());
}

#[test]
fn details_page_and_missing_ids() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));

    let resp = respond(get("/listings/details?id=3", None), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("DHA Plot"));
    assert!(body.contains("maps.google.com"));
    assert!(!body.contains("Edit listing"));

    assert_eq!(respond(get("/listings/details?id=99", None), &app).status(), 404);
    assert_eq!(respond(get("/listings/details", None), &app).status(), 404);
}

#[test]
fn edit_form_splits_composites() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));
    let cookie = login_cookie(&app);

    let body = body_string(respond(get("/listings/edit?id=1", Some(&cookie)), &app));
    assert!(body.contains(r#"<option value="PKR" selected>"#));
    assert!(body.contains(r#"<option value="10,000,001 - 25,000,000" selected>"#));
    assert!(body.contains(r#"<option value="marla" selected>"#));
    assert!(body.contains(r#"value="10""#));
}

#[test]
fn edit_confirm_posts_card_edit_and_redirects() {
    let backend = StubBackend::new().reply(Endpoint::GetSellers, sellers());
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let fields = "name=DHA+Plot&email=owner%40example.com&phone_number=03001234567\
        &location=DHA+Phase+6%2C+Lahore&price_range=50%2C000%2C001%2B&price_currency=PKR\
        &property_type=Plot&area=1&area_unit=kanal&construction_status=Ready+to+move";

    // First post previews.
    let body = body_string(respond(post_form("/listings/edit?id=3", fields, Some(&cookie)), &app));
    assert!(body.contains("Confirm Listing Changes"));
    assert!(body.contains("50,000,001+ PKR"));
    assert!(calls_to(&log, Endpoint::EditListing).is_empty());

    let resp = respond(
        post_form("/listings/edit?id=3", &format!("{fields}&confirm=1"), Some(&cookie)),
        &app,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/listings/details?id=3&updated=1");

    let sent = calls_to(&log, Endpoint::EditListing);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["id"], "3");
    assert_eq!(sent[0]["priceRange"], "50,000,001+ PKR");
    assert_eq!(sent[0]["area"], "1 kanal");

    let body = body_string(respond(get("/listings/details?id=3&updated=1", Some(&cookie)), &app));
    assert!(body.contains("Listing updated successfully."));
    assert!(body.contains("Edit listing"));
}

#[test]
fn export_returns_filtered_workbook() {
    let app = test_app(StubBackend::new().reply(Endpoint::GetSellers, sellers()));
    let cookie = login_cookie(&app);

    let body = body_string(respond(get("/listings?currency=PKR", Some(&cookie)), &app));
    assert!(body.contains("/listings/export?currency=PKR"));

    let resp = respond(get("/listings/export?currency=PKR", Some(&cookie)), &app);
    assert_eq!(resp.status(), 200);
    let ctype = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ctype.contains("spreadsheetml"));
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(disposition.contains("seller_listings_"));
}

#[test]
fn export_without_loaded_listings_reports_fetch_failure() {
    let app = test_app(StubBackend::new().fail(Endpoint::GetSellers, "Workflow is offline"));
    let cookie = login_cookie(&app);

    let resp = respond(get("/listings/export", Some(&cookie)), &app);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Workflow is offline"));
}

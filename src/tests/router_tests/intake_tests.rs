use crate::tests::utils::*;
use crate::webhooks::client::Endpoint;
use serde_json::json;

const BUYER: &str = "name=Hina+Khan&email=hina%40example.com&phone_number=03211234567\
    &location=Bahria+Town%2C+Lahore&price_range=50+lakh+-+1+crore&property_type=House\
    &area=10+marla&construction_status=Ready+to+move";

const SELLER: &str = "name=Usman&email=usman%40example.com&phone_number=03331234567\
    &location=Model+Town&price_range=250%2C001+-+500%2C000&price_currency=USD\
    &property_type=House&area=2400&area_unit=sq+ft&construction_status=Ready+to+move\
    &image_url=https%3A%2F%2Fimg.example.com%2Fhouse.jpg";

#[test]
fn buyer_form_opens_with_defaults() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let body = body_string(respond(get("/dashboard/add-buyer", Some(&cookie)), &app));
    assert!(body.contains(r#"<option value="House" selected>"#));
    assert!(body.contains(r#"<option value="Ready to move" selected>"#));
}

#[test]
fn buyer_preview_then_confirm() {
    let backend = StubBackend::new();
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let body = body_string(respond(post_form("/dashboard/add-buyer", BUYER, Some(&cookie)), &app));
    assert!(body.contains("Confirm Buyer Details"));
    assert!(body.contains("Bahria Town, Lahore"));
    assert!(body.contains(r#"name="confirm" value="1""#));
    assert!(calls_to(&log, Endpoint::AddBuyer).is_empty());

    let resp = respond(
        post_form("/dashboard/add-buyer", &format!("{BUYER}&confirm=1"), Some(&cookie)),
        &app,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard?notice=buyer-added");

    let sent = calls_to(&log, Endpoint::AddBuyer);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["name"], "Hina Khan");
    assert_eq!(sent[0]["phoneNumber"], "03211234567");
    assert_eq!(sent[0]["priceRange"], "50 lakh - 1 crore");
}

#[test]
fn buyer_edit_returns_to_form_with_values() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let body = body_string(respond(
        post_form("/dashboard/add-buyer", &format!("{BUYER}&edit=1"), Some(&cookie)),
        &app,
    ));
    assert!(body.contains("Add Buyer"));
    assert!(body.contains(r#"value="Hina Khan""#));
    assert!(!body.contains("Confirm Buyer Details"));
}

#[test]
fn buyer_validation_errors_block_preview() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let body = body_string(respond(
        post_form("/dashboard/add-buyer", "name=&email=bad", Some(&cookie)),
        &app,
    ));
    assert!(body.contains("Name is required"));
    assert!(!body.contains("Confirm Buyer Details"));
}

#[test]
fn buyer_backend_failure_keeps_form() {
    let app = test_app(StubBackend::new().fail(Endpoint::AddBuyer, "Sheet is locked"));
    let cookie = login_cookie(&app);

    let resp = respond(
        post_form("/dashboard/add-buyer", &format!("{BUYER}&confirm=1"), Some(&cookie)),
        &app,
    );
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sheet is locked"));
    assert!(body.contains(r#"value="Hina Khan""#));
}

#[test]
fn seller_confirm_sends_composites_and_image() {
    let backend = StubBackend::new();
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let body = body_string(respond(post_form("/dashboard/add-seller", SELLER, Some(&cookie)), &app));
    assert!(body.contains("Confirm Seller Details"));
    assert!(body.contains("250,001 - 500,000 USD"));
    assert!(body.contains("2400 sq ft"));
    assert!(body.contains(r#"src="https://img.example.com/house.jpg""#));

    let resp = respond(
        post_form("/dashboard/add-seller", &format!("{SELLER}&confirm=1"), Some(&cookie)),
        &app,
    );
    assert_eq!(location(&resp), "/dashboard?notice=seller-added");

    let sent = calls_to(&log, Endpoint::AddSeller);
    assert_eq!(sent[0]["priceRange"], "250,001 - 500,000 USD");
    assert_eq!(sent[0]["area"], "2400 sq ft");
    assert_eq!(sent[0]["image"], "https://img.example.com/house.jpg");
}

#[test]
fn seller_bracket_must_belong_to_currency() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let form = SELLER.replace("price_currency=USD", "price_currency=PKR");
    let body = body_string(respond(post_form("/dashboard/add-seller", &form, Some(&cookie)), &app));
    assert!(body.contains("Select a price range for the chosen currency"));
}

#[test]
fn seller_currency_refresh_clears_bracket() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let form = SELLER.replace("price_currency=USD", "price_currency=PKR");
    let body = body_string(respond(
        post_form(
            "/dashboard/add-seller",
            &format!("{form}&applied_currency=USD&refresh=1"),
            Some(&cookie),
        ),
        &app,
    ));
    assert!(body.contains("50,000,001+"));
    assert!(body.contains(r#"name="applied_currency" value="PKR""#));
    assert!(!body.contains(r#"<option value="250,001 - 500,000" selected>"#));
}

#[test]
fn seller_rejects_unsupported_image() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let form = SELLER.replace(
        "image_url=https%3A%2F%2Fimg.example.com%2Fhouse.jpg",
        "image_url=ftp%3A%2F%2Fexample.com%2Fa.png",
    );
    let body = body_string(respond(post_form("/dashboard/add-seller", &form, Some(&cookie)), &app));
    assert!(body.contains("Image must be an http(s) URL or an image data URL"));
    assert!(!body.contains("Confirm Seller Details"));
}

#[test]
fn price_check_shows_output_text() {
    let backend = StubBackend::new().reply(
        Endpoint::CheckPrice,
        json!({ "output": "Estimated value: PKR 2.1 crore" }),
    );
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let body = body_string(respond(
        post_form(
            "/dashboard/price-check",
            "prompt=10+marla+house+in+DHA+Multan",
            Some(&cookie),
        ),
        &app,
    ));
    assert!(body.contains("Estimated value: PKR 2.1 crore"));
    assert!(body.contains("Received a response from the AI assistant."));
    assert_eq!(
        calls_to(&log, Endpoint::CheckPrice)[0]["prompt"],
        "10 marla house in DHA Multan"
    );
}

#[test]
fn price_check_requires_prompt() {
    let backend = StubBackend::new();
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let resp = respond(post_form("/dashboard/price-check", "prompt=+", Some(&cookie)), &app);
    assert_eq!(resp.status(), 200);
    assert!(calls_to(&log, Endpoint::CheckPrice).is_empty());
}

fn seller_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Usman"),
        ("email", "usman@example.com"),
        ("phone_number", "03331234567"),
        ("location", "Model Town"),
        ("applied_currency", "USD"),
        ("price_currency", "USD"),
        ("price_range", "250,001 - 500,000"),
        ("property_type", "House"),
        ("area", "2400"),
        ("area_unit", "sq ft"),
        ("construction_status", "Ready to move"),
        ("image_url", ""),
    ]
}

#[test]
fn seller_image_upload_becomes_data_url() {
    let backend = StubBackend::new();
    let log = backend.log();
    let app = test_app(backend);
    let cookie = login_cookie(&app);

    let req = post_multipart(
        "/dashboard/add-seller",
        &seller_fields(),
        Some(("image_file", "image/png", &b"hello"[..])),
        Some(&cookie),
    );
    let body = body_string(respond(req, &app));
    assert!(body.contains("Confirm Seller Details"));
    assert!(body.contains(r#"src="data:image/png;base64,aGVsbG8=""#));
    assert!(body.contains(r#"name="image_url" value="data:image/png;base64,aGVsbG8=""#));

    // The preview re-posts the data URL as an ordinary form field.
    let confirm = SELLER.replace(
        "image_url=https%3A%2F%2Fimg.example.com%2Fhouse.jpg",
        "image_url=data%3Aimage%2Fpng%3Bbase64%2CaGVsbG8%3D&confirm=1",
    );
    let resp = respond(post_form("/dashboard/add-seller", &confirm, Some(&cookie)), &app);
    assert_eq!(location(&resp), "/dashboard?notice=seller-added");
    assert_eq!(calls_to(&log, Endpoint::AddSeller)[0]["image"], "data:image/png;base64,aGVsbG8=");
}

#[test]
fn seller_image_over_5mb_is_rejected() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let big = vec![0u8; 5 * 1024 * 1024 + 1];
    let req = post_multipart(
        "/dashboard/add-seller",
        &seller_fields(),
        Some(("image_file", "image/jpeg", big.as_slice())),
        Some(&cookie),
    );
    let body = body_string(respond(req, &app));
    assert!(body.contains("Image size cannot exceed 5MB."));
    assert!(!body.contains("Confirm Seller Details"));
}

#[test]
fn seller_non_image_upload_is_rejected() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let req = post_multipart(
        "/dashboard/add-seller",
        &seller_fields(),
        Some(("image_file", "application/pdf", &b"%PDF-1.4"[..])),
        Some(&cookie),
    );
    let body = body_string(respond(req, &app));
    assert!(body.contains("Image must be an http(s) URL or an image data URL"));
}

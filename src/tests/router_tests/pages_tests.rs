use crate::tests::utils::*;

#[test]
fn public_pages_render() {
    let app = test_app(StubBackend::new());

    for (uri, marker) in [
        ("/", "Find Your Future Home, Intelligently."),
        ("/about", "About Estately"),
        ("/contact", "Get in Touch"),
    ] {
        let resp = respond(get(uri, None), &app);
        assert_eq!(resp.status(), 200, "{uri}");
        let body = body_string(resp);
        assert!(body.contains(marker), "{uri} missing {marker}");
        assert!(body.contains("<!DOCTYPE html>"));
    }
}

#[test]
fn anonymous_chrome_offers_login_and_signup() {
    let app = test_app(StubBackend::new());
    let body = body_string(respond(get("/", None), &app));
    assert!(body.contains(r#"href="/login""#));
    assert!(body.contains(r#"href="/signup""#));
    assert!(!body.contains(r#"action="/logout""#));
}

#[test]
fn stylesheet_is_served() {
    let app = test_app(StubBackend::new());
    let resp = respond(get("/static/main.css", None), &app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".notice.error"));
}

#[test]
fn unknown_route_is_404() {
    let app = test_app(StubBackend::new());
    let resp = respond(get("/nope", None), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Page not found"));
}

#[test]
fn wrong_method_is_404() {
    let app = test_app(StubBackend::new());
    let resp = respond(post_form("/about", "", None), &app);
    assert_eq!(resp.status(), 404);
}

#[test]
fn guarded_pages_redirect_to_login() {
    let app = test_app(StubBackend::new());
    for uri in [
        "/dashboard",
        "/dashboard/add-buyer",
        "/dashboard/add-seller",
        "/dashboard/price-check",
        "/dashboard/buyers",
        "/listings/export",
    ] {
        let resp = respond(get(uri, None), &app);
        assert_eq!(resp.status(), 303, "{uri}");
        assert_eq!(location(&resp), "/login", "{uri}");
    }
}

#[test]
fn dashboard_greets_user_and_shows_notice() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let resp = respond(get("/dashboard?notice=seller-added", Some(&cookie)), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Test Agent"));
    assert!(body.contains("Seller information submitted successfully."));
    assert!(body.contains(r#"action="/logout""#));
}

#[test]
fn forged_cookie_is_anonymous() {
    let app = test_app(StubBackend::new());
    let resp = respond(get("/dashboard", Some("session=not-a-real-token")), &app);
    assert_eq!(resp.status(), 303);
}

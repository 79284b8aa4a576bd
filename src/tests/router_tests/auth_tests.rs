use crate::tests::utils::*;
use crate::webhooks::client::Endpoint;
use serde_json::json;

fn set_cookie(resp: &astra::Response) -> String {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

#[test]
fn login_page_loads() {
    let app = test_app(StubBackend::new());
    let resp = respond(get("/login", None), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Welcome back"));
    assert!(body.contains(r#"action="/login""#));
}

#[test]
fn login_sets_cookie_and_opens_dashboard() {
    let backend = StubBackend::new().reply(
        Endpoint::Login,
        json!({ "success": true, "user": { "name": "Ayesha", "email": "ayesha@example.com" } }),
    );
    let log = backend.log();
    let app = test_app(backend);

    let resp = respond(
        post_form("/login", "email=ayesha%40example.com&password=secret123", None),
        &app,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");

    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let sent = calls_to(&log, Endpoint::Login);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["email"], "ayesha@example.com");

    // The cookie pair alone is what the browser sends back.
    let pair = cookie.split(';').next().unwrap().to_string();
    let resp = respond(get("/dashboard", Some(&pair)), &app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Ayesha"));

    // Signed-in visitors skip the login form.
    let resp = respond(get("/login", Some(&pair)), &app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn rejected_credentials_show_message() {
    let backend = StubBackend::new().reply(Endpoint::Login, json!({ "success": false }));
    let app = test_app(backend);

    let resp = respond(post_form("/login", "email=a%40b.co&password=nope", None), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Invalid email or password."));
    assert!(!body.contains("nope"));
}

#[test]
fn login_backend_error_is_shown() {
    let backend = StubBackend::new().fail(Endpoint::Login, "Account not verified");
    let app = test_app(backend);

    let resp = respond(post_form("/login", "email=a%40b.co&password=pw", None), &app);
    assert!(body_string(resp).contains("Account not verified"));
}

#[test]
fn invalid_login_form_never_calls_backend() {
    let backend = StubBackend::new();
    let log = backend.log();
    let app = test_app(backend);

    let resp = respond(post_form("/login", "email=not-an-email&password=", None), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Password is required"));
    assert!(calls_to(&log, Endpoint::Login).is_empty());
}

#[test]
fn logout_revokes_session() {
    let app = test_app(StubBackend::new());
    let cookie = login_cookie(&app);

    let resp = respond(post_form("/logout", "", Some(&cookie)), &app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    assert!(set_cookie(&resp).contains("Max-Age=0"));

    // Replaying the old cookie no longer works.
    let resp = respond(get("/dashboard", Some(&cookie)), &app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login");
}

#[test]
fn signup_then_verify_redirects_to_login() {
    let backend = StubBackend::new().reply(
        Endpoint::Signup,
        json!({ "message": "Verification code sent to your email." }),
    );
    let log = backend.log();
    let app = test_app(backend);

    let resp = respond(
        post_form(
            "/signup",
            "name=Bilal&email=bilal%40example.com&password=longenough&confirm_password=longenough",
            None,
        ),
        &app,
    );
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Verification code sent to your email."));
    assert!(body.contains(r#"action="/signup/verify""#));
    assert_eq!(calls_to(&log, Endpoint::Signup)[0]["name"], "Bilal");

    let resp = respond(
        post_form("/signup/verify", "email=bilal%40example.com&code=123456", None),
        &app,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?verified=1");

    let body = body_string(respond(get("/login?verified=1", None), &app));
    assert!(body.contains("Email verified."));
}

#[test]
fn signup_password_mismatch() {
    let backend = StubBackend::new();
    let log = backend.log();
    let app = test_app(backend);
    let resp = respond(
        post_form(
            "/signup",
            "name=Bilal&email=bilal%40example.com&password=longenough&confirm_password=different1",
            None,
        ),
        &app,
    );
    assert!(body_string(resp).contains("Passwords don't match"));
    assert!(calls_to(&log, Endpoint::Signup).is_empty());
}

#[test]
fn password_reset_walks_three_steps() {
    let app = test_app(StubBackend::new());

    let body = body_string(respond(
        post_form("/forgot-password", "email=c%40d.io", None),
        &app,
    ));
    assert!(body.contains("Enter Verification Code"));
    assert!(body.contains("c@d.io"));

    let body = body_string(respond(
        post_form("/forgot-password/verify", "email=c%40d.io&code=9876", None),
        &app,
    ));
    assert!(body.contains("Set a New Password"));

    let resp = respond(
        post_form(
            "/forgot-password/reset",
            "email=c%40d.io&password=newpassword&confirm_password=newpassword",
            None,
        ),
        &app,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?reset=1");
}

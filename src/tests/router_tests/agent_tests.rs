use crate::ai::RecommendedAgent;
use crate::tests::utils::*;

const QUERY: &str = "location=Lahore&property_type=House&budget=2+crore&unique_requirements=";

fn agent(name: &str) -> RecommendedAgent {
    RecommendedAgent {
        name: name.into(),
        specialization: "Residential".into(),
        experience_years: Some(12.0),
        contact_info: "0300 0000000".into(),
        why_recommended: "Knows DHA inside out".into(),
    }
}

#[test]
fn form_is_public() {
    let app = test_app(StubBackend::new());
    let resp = respond(get("/connect-agent", None), &app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Find Your Perfect Agent"));
}

#[test]
fn recommendations_are_rendered() {
    let app = test_app_with(
        StubBackend::new(),
        StubMatcher {
            agents: Some(vec![agent("Sana Malik"), agent("Omar Farooq")]),
        },
    );

    let body = body_string(respond(post_form("/connect-agent", QUERY, None), &app));
    assert!(body.contains("Your Recommended Agents"));
    assert!(body.contains("Sana Malik"));
    assert!(body.contains("Omar Farooq"));
    assert!(body.contains("12 years of experience"));
}

#[test]
fn matcher_failure_is_a_notice() {
    let app = test_app_with(StubBackend::new(), StubMatcher { agents: None });
    let resp = respond(post_form("/connect-agent", QUERY, None), &app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Failed to find agents. Please try again later."));
}

#[test]
fn short_fields_are_rejected() {
    let app = test_app(StubBackend::new());
    let body = body_string(respond(
        post_form("/connect-agent", "location=L&property_type=H&budget=1", None),
        &app,
    ));
    assert!(body.contains("Location is required."));
    assert!(!body.contains("Your Recommended Agents"));
}

// models.rs
use crate::auth::SessionUser;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailPayload {
    pub email: String,
}

/// Used by both e-mail verification and reset-code verification.
#[derive(Debug, Clone, Serialize)]
pub struct EmailCodePayload {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordPayload {
    pub email: String,
    pub password: String,
}

/// Listing fields as the intake webhooks expect them. For sellers and edits
/// `price_range` and `area` already carry their trailing currency / unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub price_range: String,
    pub property_type: String,
    pub area: String,
    pub construction_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerPayload {
    #[serde(flatten)]
    pub listing: ListingPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditListingPayload {
    #[serde(flatten)]
    pub listing: ListingPayload,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricePromptPayload {
    pub prompt: String,
}

/// Parsed JSON body of a successful webhook call.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookReply {
    pub body: Value,
}

impl WebhookReply {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// `message` field if present, otherwise the pretty-printed body.
    pub fn message(&self) -> String {
        extract_message(&self.body).unwrap_or_else(|| "Done.".to_string())
    }

    /// What the price assistant shows: `output` verbatim when it is text,
    /// the whole body pretty-printed otherwise.
    pub fn output_text(&self) -> String {
        match self.body.get("output") {
            Some(Value::String(s)) => s.clone(),
            _ => pretty(&self.body),
        }
    }
}

/// User-facing message from a reply body. `None` only when there is no body.
pub fn extract_message(body: &Value) -> Option<String> {
    if body.is_null() {
        return None;
    }
    if let Some(msg) = body.get("message").and_then(Value::as_str) {
        if !msg.is_empty() {
            return Some(msg.to_string());
        }
    }
    Some(match body {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::String(_) => return None,
        other => pretty(other),
    })
}

fn pretty(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Who the login webhook says just signed in. Accepts `{name, email}` at the
/// top level or under `user`; a body with `success: false` is a rejection.
pub fn parse_login(body: &Value, submitted_email: &str) -> Option<SessionUser> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return None;
    }

    let src = body
        .get("user")
        .filter(|u| u.is_object())
        .unwrap_or(body);
    let text = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| src.get(*k).and_then(Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let email = text(&["email", "Email"]).unwrap_or_else(|| submitted_email.to_string());
    let name = text(&["name", "Name"]).unwrap_or_else(|| {
        email
            .split('@')
            .next()
            .unwrap_or(email.as_str())
            .to_string()
    });

    Some(SessionUser { name, email })
}

// client.rs
use crate::auth::SessionUser;
use crate::config::{WebhookConfig, WebhookEndpoints};
use crate::domain::ListingKind;
use crate::webhooks::models::*;
use crate::webhooks::WebhookError;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("estately/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Signup,
    VerifyEmail,
    Login,
    ForgotPassword,
    VerifyResetCode,
    ResetPassword,
    AddBuyer,
    AddSeller,
    EditListing,
    GetSellers,
    GetBuyers,
    CheckPrice,
}

impl Endpoint {
    pub fn path<'a>(&self, e: &'a WebhookEndpoints) -> &'a str {
        match self {
            Endpoint::Signup => &e.signup,
            Endpoint::VerifyEmail => &e.verify_email,
            Endpoint::Login => &e.login,
            Endpoint::ForgotPassword => &e.forgot_password,
            Endpoint::VerifyResetCode => &e.verify_reset_code,
            Endpoint::ResetPassword => &e.reset_password,
            Endpoint::AddBuyer => &e.add_buyer,
            Endpoint::AddSeller => &e.add_seller,
            Endpoint::EditListing => &e.edit_listing,
            Endpoint::GetSellers => &e.get_sellers,
            Endpoint::GetBuyers => &e.get_buyers,
            Endpoint::CheckPrice => &e.check_price,
        }
    }
}

/// The workflow backend. Implementors supply `post`; the typed calls are
/// built on top of it so test stubs only need to answer by endpoint.
pub trait Backend: Send + Sync {
    fn post(&self, endpoint: Endpoint, body: &Value) -> Result<Value, WebhookError>;
}

fn encode<T: Serialize>(payload: &T) -> Result<Value, WebhookError> {
    serde_json::to_value(payload).map_err(|e| WebhookError::Encode(e.to_string()))
}

fn send<T: Serialize>(
    backend: &dyn Backend,
    endpoint: Endpoint,
    payload: &T,
) -> Result<WebhookReply, WebhookError> {
    let body = encode(payload)?;
    backend.post(endpoint, &body).map(WebhookReply::new)
}

/// Typed calls, usable on any `&dyn Backend`.
impl<'a> dyn Backend + 'a {
    pub fn signup(&self, p: &SignupPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::Signup, p)
    }

    pub fn verify_email(&self, p: &EmailCodePayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::VerifyEmail, p)
    }

    /// `Ok(None)` means the backend answered but did not accept the credentials.
    pub fn login(&self, p: &LoginPayload) -> Result<Option<SessionUser>, WebhookError> {
        let reply = send(self, Endpoint::Login, p)?;
        Ok(parse_login(&reply.body, &p.email))
    }

    pub fn forgot_password(&self, p: &EmailPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::ForgotPassword, p)
    }

    pub fn verify_reset_code(&self, p: &EmailCodePayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::VerifyResetCode, p)
    }

    pub fn reset_password(&self, p: &ResetPasswordPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::ResetPassword, p)
    }

    pub fn add_buyer(&self, p: &ListingPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::AddBuyer, p)
    }

    pub fn add_seller(&self, p: &SellerPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::AddSeller, p)
    }

    pub fn edit_listing(&self, p: &EditListingPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::EditListing, p)
    }

    pub fn check_price(&self, p: &PricePromptPayload) -> Result<WebhookReply, WebhookError> {
        send(self, Endpoint::CheckPrice, p)
    }

    /// Raw listing body; normalization happens in the domain layer.
    pub fn fetch_listings(&self, kind: ListingKind) -> Result<Value, WebhookError> {
        let endpoint = match kind {
            ListingKind::Seller => Endpoint::GetSellers,
            ListingKind::Buyer => Endpoint::GetBuyers,
        };
        self.post(endpoint, &Value::Object(Default::default()))
    }
}

pub struct WebhookClient {
    client: Client,
    base: Url,
    endpoints: WebhookEndpoints,
}

impl WebhookClient {
    pub fn new(cfg: &WebhookConfig) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| WebhookError::Network(e.to_string()))?;

        let base = Url::parse(&cfg.base_url).map_err(|e| WebhookError::Url(e.to_string()))?;

        Ok(Self {
            client,
            base,
            endpoints: cfg.endpoints.clone(),
        })
    }

    pub fn url_for(&self, endpoint: Endpoint) -> Result<Url, WebhookError> {
        self.base
            .join(endpoint.path(&self.endpoints))
            .map_err(|e| WebhookError::Url(e.to_string()))
    }
}

impl Backend for WebhookClient {
    fn post(&self, endpoint: Endpoint, body: &Value) -> Result<Value, WebhookError> {
        let url = self.url_for(endpoint)?;
        tracing::debug!(?endpoint, %url, "webhook call");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|e| {
                tracing::warn!(?endpoint, error = %e, "webhook unreachable");
                WebhookError::Network(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().unwrap_or_default();
        let parsed = parse_body(&text);

        if status.is_success() {
            return Ok(parsed);
        }

        tracing::warn!(?endpoint, status = status.as_u16(), "webhook rejected request");
        let message = extract_message(&parsed)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
        Err(WebhookError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Empty body -> null, non-JSON text -> string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

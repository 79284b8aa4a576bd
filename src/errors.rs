// errors.rs
use astra::Response;

/// Errors originating from either the server logic
/// (routing, missing resources, guards) or downstream layers (DB, webhooks).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Guarded page requested without a live session. Rendered as a redirect.
    #[error("Login required")]
    LoginRequired,

    #[error("Database Error: {0}")]
    DbError(String),

    /// Webhook backend or AI provider failed.
    #[error("Upstream Error: {0}")]
    Upstream(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

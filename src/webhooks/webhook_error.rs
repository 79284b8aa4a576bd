#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx reply. `message` is already the user-facing text.
    #[error("Webhook rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid webhook payload: {0}")]
    Encode(String),

    #[error("Bad webhook URL: {0}")]
    Url(String),
}

impl WebhookError {
    /// Text safe to show in a page notice.
    pub fn user_message(&self) -> String {
        match self {
            WebhookError::Network(msg) => msg.clone(),
            WebhookError::Rejected { message, .. } => message.clone(),
            WebhookError::Encode(_) | WebhookError::Url(_) => {
                "An unexpected error occurred.".to_string()
            }
        }
    }
}

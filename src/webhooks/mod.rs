pub mod client;
pub mod models;
mod webhook_error;

pub use client::{Backend, WebhookClient};
pub use webhook_error::WebhookError;

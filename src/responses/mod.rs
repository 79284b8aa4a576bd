pub mod errors;
pub mod html;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::{css_response, html_response, redirect, redirect_with_cookie};
pub use xlsx::xlsx_response;

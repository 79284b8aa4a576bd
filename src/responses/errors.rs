use crate::errors::ServerError;
use crate::templates::components::error::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Turn a handler error into the page the visitor sees.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::LoginRequired => login_redirect(),
        ServerError::NotFound => html_error_response(404, "Page not found"),
        ServerError::BadRequest(msg) => html_error_response(400, &msg),
        ServerError::Upstream(msg) => html_error_response(502, &msg),
        ServerError::DbError(msg) => {
            tracing::error!(error = %msg, "database error");
            html_error_response(500, "Something went wrong on our side.")
        }
        ServerError::XlsxError(msg) => {
            tracing::error!(error = %msg, "spreadsheet error");
            html_error_response(500, "Could not build the spreadsheet.")
        }
        ServerError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

pub fn html_error_response(status: u16, message: &str) -> Response {
    let body = error_page(status, message).into_string();
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

fn login_redirect() -> Response {
    ResponseBuilder::new()
        .status(303)
        .header("Location", "/login")
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

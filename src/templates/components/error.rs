use maud::{html, Markup, DOCTYPE};

/// Standalone error document. Rendered without the site shell because the
/// error path has no session or site config at hand.
pub fn error_page(status: u16, message: &str) -> Markup {
    let heading = match status {
        404 => "Page not found",
        400 => "Bad request",
        502 => "Service unavailable",
        _ => "Something went wrong",
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) " | Estately" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { (status) " - " (heading) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}

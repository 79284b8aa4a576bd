use crate::forms::{FormData, FormErrors};
use crate::templates::components::{notice, Field, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

/// AI price assistant. `answer` is the already-formatted reply text.
pub fn price_check_page(
    chrome: &Chrome,
    form: &FormData,
    errors: &FormErrors,
    answer: Option<&str>,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    desktop_layout(
        "AI Price Check",
        chrome,
        html! {
            section class="container narrow" {
                a href="/dashboard" class="back" { "← Back to dashboard" }
                h1 { "AI Price Check" }
                p class="lead" { "Describe a property and get an estimated market price." }
                @if let Some((kind, msg)) = flash { (notice(kind, msg)) }

                form method="post" action="/dashboard/price-check" class="card" {
                    (f.textarea("Your question", "prompt", "e.g. 10 marla house in DHA Lahore, 5 beds, built 2018"))
                    button type="submit" class="primary" { "Ask" }
                }

                @if let Some(text) = answer {
                    section class="card result" {
                        h2 { "AI Response" }
                        pre class="whitespace-pre-wrap" { (text) }
                    }
                }
            }
        },
    )
}

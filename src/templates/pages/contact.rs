use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

/// Static page. The message form is presentational and posts nowhere.
pub fn contact_page(chrome: &Chrome) -> Markup {
    desktop_layout(
        "Contact",
        chrome,
        html! {
            section class="container grid two" {
                div {
                    h1 { "Get in Touch" }
                    p class="lead" { "Have a question or want to work with us? We'd love to hear from you." }
                    dl class="contact" {
                        dt { "Office" } dd { "123 Main Street, Anytown, USA 12345" }
                        dt { "Email" } dd { a href="mailto:info@estately.com" { "info@estately.com" } }
                        dt { "Phone" } dd { a href="tel:+11234567890" { "(123) 456-7890" } }
                    }
                }
                form class="card" onsubmit="return false;" {
                    div class="field" { label for="c-name" { "Name" } input id="c-name" type="text" placeholder="Your name"; }
                    div class="field" { label for="c-email" { "Email" } input id="c-email" type="email" placeholder="you@example.com"; }
                    div class="field" { label for="c-message" { "Message" } textarea id="c-message" placeholder="How can we help?" {} }
                    button type="submit" disabled { "Send Message" }
                }
            }
        },
    )
}

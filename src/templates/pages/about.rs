use crate::templates::{components::card, desktop_layout, Chrome};
use maud::{html, Markup};

const VALUES: &[(&str, &str)] = &[
    (
        "Our Mission",
        "To empower home buyers and sellers with transparent, data-driven tools and expert guidance, making real estate simple and accessible for everyone.",
    ),
    (
        "Our Vision",
        "To be the most trusted and innovative real estate platform, creating seamless and positive experiences for every client we serve.",
    ),
    (
        "Our Team",
        "A dedicated group of technologists, designers, and real estate professionals passionate about building the future of property ownership.",
    ),
];

pub fn about_page(chrome: &Chrome) -> Markup {
    desktop_layout(
        "About",
        chrome,
        html! {
            section class="container" {
                h1 { "About Estately" }
                h2 { "Our Story" }
                p {
                    "Estately started with a simple idea: buying or selling a home should feel guided, not overwhelming. "
                    "We pair local agents with tools that do the busywork so people can focus on decisions."
                }
                h2 { "Our Core Values" }
                p class="lead" { "The principles that guide every decision we make." }
                div class="grid" {
                    @for (title, blurb) in VALUES {
                        (card(title, html! { p { (blurb) } }))
                    }
                }
            }
        },
    )
}

// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout, Chrome};
use maud::{html, Markup};

const FEATURES: &[(&str, &str)] = &[
    (
        "AI-Powered Agent Matching",
        "Our intelligent system analyzes your unique needs to connect you with the perfect real estate professional.",
    ),
    (
        "Data-Driven Market Insights",
        "Access comprehensive market trends and analytics to make informed investment decisions.",
    ),
    (
        "Seamless & Secure Platform",
        "Navigate the buying and selling process with confidence through our streamlined and secure platform.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Tell Us Your Dream",
        "Start by providing your preferences through our intuitive form. Let our AI understand exactly what you're looking for.",
    ),
    (
        "Meet Your Matched Agent",
        "We instantly connect you with a top-rated agent whose expertise aligns perfectly with your criteria.",
    ),
    (
        "Explore with an Expert",
        "Your agent will guide you through curated listings and viewings, providing invaluable insights along the way.",
    ),
    (
        "Close with Confidence",
        "From offer to closing, our platform and your agent ensure a smooth, transparent, and secure transaction.",
    ),
];

pub fn home_page(chrome: &Chrome) -> Markup {
    desktop_layout(
        "Your Modern Real Estate Partner",
        chrome,
        html! {
            section class="hero" {
                h1 { "Find Your Future Home, Intelligently." }
                p class="lead" {
                    "Estately combines cutting-edge AI with expert human guidance to make your real estate journey seamless and successful."
                }
                div class="actions" {
                    a class="btn primary" href="/connect-agent" { "Find Your Agent" }
                    a class="btn" href="/dashboard" { "Explore Dashboard" }
                }
            }

            section class="features grid" {
                @for (title, blurb) in FEATURES {
                    (card(title, html! { p { (blurb) } }))
                }
            }

            section class="how-it-works" {
                h2 { "How It Works" }
                ol {
                    @for (title, blurb) in STEPS {
                        li { h3 { (title) } p { (blurb) } }
                    }
                }
            }

            section class="cta card" {
                h2 { "Ready to Find Your Dream Home?" }
                p {
                    "Create an account today and take the first step towards finding your dream home with the power of AI."
                }
                a class="btn primary" href="/signup" { "Get Started Now" }
            }
        },
    )
}

use crate::ai::RecommendedAgent;
use crate::forms::{FormData, FormErrors};
use crate::templates::components::{notice, Field, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn connect_agent_page(
    chrome: &Chrome,
    form: &FormData,
    errors: &FormErrors,
    agents: Option<&[RecommendedAgent]>,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    desktop_layout(
        "Connect with an Agent",
        chrome,
        html! {
            section class="container" {
                h1 { "Find Your Perfect Agent" }
                p class="lead" {
                    "Tell us about your dream home, and our AI will match you with the best real estate agents for your needs."
                }
                @if let Some((kind, msg)) = flash { (notice(kind, msg)) }

                form method="post" action="/connect-agent" class="card" {
                    h2 { "Your Preferences" }
                    p { "Tell us what you're looking for in a home and an agent." }
                    (f.input("Location", "location", "text", "e.g. 'San Francisco, CA'"))
                    (f.input("Property Type", "property_type", "text", "e.g. 'Single-family house'"))
                    (f.input("Budget", "budget", "text", "e.g. '$800,000 - $1,200,000'"))
                    (f.textarea("Unique Requirements (Optional)", "unique_requirements", "e.g. 'Large backyard for a dog, near a good school'"))
                    button type="submit" class="primary" { "Find My Perfect Agent" }
                }

                @if let Some(agents) = agents {
                    section class="results" {
                        h2 { "Your Recommended Agents" }
                        @if agents.is_empty() {
                            p { "No agents matched these preferences. Try broadening your search." }
                        }
                        @for agent in agents {
                            (agent_card(agent))
                        }
                    }
                }
            }
        },
    )
}

fn agent_card(agent: &RecommendedAgent) -> Markup {
    html! {
        article class="card agent" {
            h3 { (agent.name) }
            p class="specialization" { (agent.specialization) }
            @if let Some(years) = agent.experience_years {
                p { (format!("{years:.0}")) " years of experience" }
            }
            p class="contact" { (agent.contact_info) }
            h4 { "Why they're a great match:" }
            p { (agent.why_recommended) }
        }
    }
}

use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Linked tile used on the dashboard and home page.
pub fn link_card(href: &str, title: &str, blurb: &str) -> Markup {
    html! {
        a class="card link-card" href=(href) {
            h3 { (title) }
            p { (blurb) }
        }
    }
}

use crate::auth::SessionUser;
use crate::templates::components::{link_card, notice, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn dashboard_page(chrome: &Chrome, user: &SessionUser, flash: Option<(NoticeKind, &str)>) -> Markup {
    desktop_layout(
        "Dashboard",
        chrome,
        html! {
            section class="container" {
                h1 { "Dashboard" }
                p { "Signed in as " strong { (user.name) } " (" (user.email) ")" }

                @if let Some((kind, msg)) = flash {
                    (notice(kind, msg))
                }

                h2 { "Buyer Tools" }
                div class="grid" {
                    (link_card("/dashboard/add-buyer", "Add Buyer", "Record a new buyer lead and what they are looking for."))
                    (link_card("/dashboard/buyers", "Buyer Listings", "Browse and filter buyer leads."))
                    (link_card("/connect-agent", "Find an Agent", "Let AI suggest agents for a buyer's needs."))
                }

                h2 { "Seller Tools" }
                div class="grid" {
                    (link_card("/dashboard/add-seller", "Add Seller", "List a property with price, area, and photo."))
                    (link_card("/listings", "Seller Listings", "Browse, filter, edit, and export seller listings."))
                    (link_card("/dashboard/price-check", "AI Price Check", "Ask the pricing assistant what a property is worth."))
                }
            }
        },
    )
}

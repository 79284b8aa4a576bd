use crate::forms::{FormData, FormErrors};
use crate::templates::components::{notice, Field, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn login_page(
    chrome: &Chrome,
    form: &FormData,
    errors: &FormErrors,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    desktop_layout(
        "Login",
        chrome,
        html! {
            section class="container narrow" {
                h1 { "Welcome back" }
                p class="lead" { "Sign in to manage your listings and leads." }

                @if let Some((kind, msg)) = flash {
                    (notice(kind, msg))
                }

                form method="post" action="/login" class="card" {
                    (f.input("Email", "email", "email", "you@example.com"))
                    (f.input("Password", "password", "password", ""))
                    button type="submit" class="primary" { "Login" }
                }

                p { a href="/forgot-password" { "Forgot your password?" } }
                p { "Don't have an account? " a href="/signup" { "Sign up" } }
            }
        },
    )
}

use crate::forms::{FormData, FormErrors};
use crate::templates::components::{notice, Field, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    Details,
    /// Waiting for the code mailed to this address.
    Verify,
}

pub fn signup_page(
    chrome: &Chrome,
    step: SignupStep,
    form: &FormData,
    errors: &FormErrors,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    let (title, description) = match step {
        SignupStep::Details => (
            "Create an Account".to_string(),
            "Join Estately to find your dream home today.".to_string(),
        ),
        SignupStep::Verify => (
            "Verify Your Email".to_string(),
            format!(
                "A verification code has been sent to {}. Please enter it below.",
                form.get("email")
            ),
        ),
    };

    desktop_layout(
        "Sign Up",
        chrome,
        html! {
            section class="container narrow" {
                h1 { (title) }
                p class="lead" { (description) }

                @if let Some((kind, msg)) = flash {
                    (notice(kind, msg))
                }

                @match step {
                    SignupStep::Details => {
                        form method="post" action="/signup" class="card" {
                            (f.input("Name", "name", "text", "Your full name"))
                            (f.input("Email", "email", "email", "you@example.com"))
                            (f.input("Password", "password", "password", ""))
                            (f.input("Confirm Password", "confirm_password", "password", ""))
                            button type="submit" class="primary" { "Sign Up" }
                        }
                        p { "Already have an account? " a href="/login" { "Login" } }
                    }
                    SignupStep::Verify => {
                        form method="post" action="/signup/verify" class="card" {
                            input type="hidden" name="email" value=(form.get("email"));
                            (f.input("Verification Code", "code", "text", "Enter code"))
                            button type="submit" class="primary" { "Verify Email" }
                        }
                    }
                }
            }
        },
    )
}

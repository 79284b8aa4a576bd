use crate::forms::{FormData, FormErrors};
use crate::templates::components::{notice, Field, NoticeKind};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    Email,
    Code,
    NewPassword,
}

pub fn forgot_password_page(
    chrome: &Chrome,
    step: ResetStep,
    form: &FormData,
    errors: &FormErrors,
    flash: Option<(NoticeKind, &str)>,
) -> Markup {
    let f = Field::new(form, errors);
    let email = form.get("email");
    let (title, description) = match step {
        ResetStep::Email => (
            "Forgot Password",
            "Enter your email and we'll send you a code to reset your password.".to_string(),
        ),
        ResetStep::Code => (
            "Enter Verification Code",
            format!("A code has been sent to {email}."),
        ),
        ResetStep::NewPassword => ("Set a New Password", "Choose a new password for your account.".to_string()),
    };

    desktop_layout(
        "Reset Password",
        chrome,
        html! {
            section class="container narrow" {
                h1 { (title) }
                p class="lead" { (description) }

                @if let Some((kind, msg)) = flash {
                    (notice(kind, msg))
                }

                @match step {
                    ResetStep::Email => {
                        form method="post" action="/forgot-password" class="card" {
                            (f.input("Email", "email", "email", "you@example.com"))
                            button type="submit" class="primary" { "Send Code" }
                        }
                    }
                    ResetStep::Code => {
                        form method="post" action="/forgot-password/verify" class="card" {
                            input type="hidden" name="email" value=(email);
                            (f.input("Verification Code", "code", "text", "Enter code"))
                            button type="submit" class="primary" { "Verify Code" }
                        }
                    }
                    ResetStep::NewPassword => {
                        form method="post" action="/forgot-password/reset" class="card" {
                            input type="hidden" name="email" value=(email);
                            (f.input("New Password", "password", "password", ""))
                            (f.input("Confirm Password", "confirm_password", "password", ""))
                            button type="submit" class="primary" { "Reset Password" }
                        }
                    }
                }

                p { a href="/login" { "Back to login" } }
            }
        },
    )
}

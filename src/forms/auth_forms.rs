use crate::forms::{FormData, FormErrors};
use crate::webhooks::models::{
    EmailCodePayload, EmailPayload, LoginPayload, ResetPasswordPayload, SignupPayload,
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_RESET_CODE_LEN: usize = 4;

/// Name, e-mail, password + confirmation. The confirmation never leaves
/// the server.
pub fn validate_signup(form: &FormData) -> Result<SignupPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let name = errors.require(form, "name", "Name is required");
    let email = errors.email(form, "email");
    let password = new_password(&mut errors, form);

    errors.finish(SignupPayload {
        name,
        email,
        password,
    })
}

pub fn validate_signup_code(form: &FormData) -> Result<EmailCodePayload, FormErrors> {
    let mut errors = FormErrors::new();
    let email = errors.email(form, "email");
    let code = errors.require(form, "code", "Verification code is required.");
    errors.finish(EmailCodePayload { email, code })
}

pub fn validate_login(form: &FormData) -> Result<LoginPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let email = errors.email(form, "email");
    // Not trimmed: whitespace may be part of a password.
    let password = form.get("password").to_string();
    if password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors.finish(LoginPayload { email, password })
}

pub fn validate_forgot_email(form: &FormData) -> Result<EmailPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let email = errors.email(form, "email");
    errors.finish(EmailPayload { email })
}

pub fn validate_reset_code(form: &FormData) -> Result<EmailCodePayload, FormErrors> {
    let mut errors = FormErrors::new();
    let email = errors.email(form, "email");
    let code = errors.min_chars(form, "code", MIN_RESET_CODE_LEN, "Verification code is required.");
    errors.finish(EmailCodePayload { email, code })
}

pub fn validate_reset_password(form: &FormData) -> Result<ResetPasswordPayload, FormErrors> {
    let mut errors = FormErrors::new();
    let email = errors.email(form, "email");
    let password = new_password(&mut errors, form);
    errors.finish(ResetPasswordPayload { email, password })
}

fn new_password(errors: &mut FormErrors, form: &FormData) -> String {
    let password = form.get("password").to_string();
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 8 characters");
    }
    if form.get("confirm_password") != password {
        errors.add("confirm_password", "Passwords don't match");
    }
    password
}

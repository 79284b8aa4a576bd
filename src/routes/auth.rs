// routes/auth.rs
use crate::app::Ctx;
use crate::auth::context::{expired_cookie, session_cookie};
use crate::auth::sessions::{create_session, revoke_session};
use crate::forms::auth_forms::*;
use crate::forms::{query_params, read_form, FormData, FormErrors};
use crate::responses::{html_response, redirect, redirect_with_cookie, ResultResp};
use crate::templates::components::NoticeKind;
use crate::templates::pages::{self, ResetStep, SignupStep};
use astra::Request;

fn login_notice(req: &Request) -> Option<&'static str> {
    let q = query_params(req);
    if q.contains_key("verified") {
        Some("Email verified. You can now log in.")
    } else if q.contains_key("reset") {
        Some("Password updated. Log in with your new password.")
    } else {
        None
    }
}

pub fn login_form(req: &Request, ctx: &Ctx) -> ResultResp {
    if ctx.session.is_authenticated() {
        return redirect("/dashboard");
    }
    let flash = login_notice(req).map(|m| (NoticeKind::Success, m));
    html_response(pages::login_page(
        &ctx.chrome(),
        &FormData::default(),
        &FormErrors::new(),
        flash,
    ))
}

pub fn login_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    let form = read_form(req)?;
    let render = |errors: &FormErrors, flash: Option<(NoticeKind, &str)>| {
        html_response(pages::login_page(&ctx.chrome(), &form, errors, flash))
    };

    let payload = match validate_login(&form) {
        Ok(p) => p,
        Err(errors) => return render(&errors, None),
    };

    match ctx.app.backend.login(&payload) {
        Ok(Some(user)) => {
            let cfg = &ctx.app.config.session;
            let token = ctx
                .app
                .db
                .with_conn(|conn| create_session(conn, &user, ctx.now, cfg.ttl_secs()))?;
            tracing::info!(user = %user.email, "signed in");
            redirect_with_cookie(
                "/dashboard",
                Some(&session_cookie(&cfg.cookie_name, &token, cfg.ttl_secs())),
            )
        }
        Ok(None) => render(
            &FormErrors::new(),
            Some((NoticeKind::Error, "Invalid email or password.")),
        ),
        Err(e) => render(&FormErrors::new(), Some((NoticeKind::Error, &e.user_message()))),
    }
}

pub fn logout(ctx: &Ctx) -> ResultResp {
    if let Some(token) = ctx.session.token() {
        ctx.app
            .db
            .with_conn(|conn| revoke_session(conn, token, ctx.now))?;
    }
    redirect_with_cookie("/", Some(&expired_cookie(&ctx.app.config.session.cookie_name)))
}

pub fn signup_form(ctx: &Ctx) -> ResultResp {
    html_response(pages::signup_page(
        &ctx.chrome(),
        SignupStep::Details,
        &FormData::default(),
        &FormErrors::new(),
        None,
    ))
}

pub fn signup_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    let form = read_form(req)?;
    let payload = match validate_signup(&form) {
        Ok(p) => p,
        Err(errors) => {
            return html_response(pages::signup_page(
                &ctx.chrome(),
                SignupStep::Details,
                &form,
                &errors,
                None,
            ))
        }
    };

    match ctx.app.backend.signup(&payload) {
        Ok(reply) => {
            let next = FormData::from_pairs(&[("email", payload.email.as_str())]);
            html_response(pages::signup_page(
                &ctx.chrome(),
                SignupStep::Verify,
                &next,
                &FormErrors::new(),
                Some((NoticeKind::Success, &reply.message())),
            ))
        }
        Err(e) => html_response(pages::signup_page(
            &ctx.chrome(),
            SignupStep::Details,
            &form,
            &FormErrors::new(),
            Some((NoticeKind::Error, &e.user_message())),
        )),
    }
}

pub fn signup_verify(req: &mut Request, ctx: &Ctx) -> ResultResp {
    let form = read_form(req)?;
    let verify_page = |errors: &FormErrors, flash: Option<(NoticeKind, &str)>| {
        html_response(pages::signup_page(
            &ctx.chrome(),
            SignupStep::Verify,
            &form,
            errors,
            flash,
        ))
    };

    let payload = match validate_signup_code(&form) {
        Ok(p) => p,
        Err(errors) => return verify_page(&errors, None),
    };

    match ctx.app.backend.verify_email(&payload) {
        Ok(_) => redirect("/login?verified=1"),
        Err(e) => verify_page(&FormErrors::new(), Some((NoticeKind::Error, &e.user_message()))),
    }
}

pub fn forgot_form(ctx: &Ctx) -> ResultResp {
    html_response(pages::forgot_password_page(
        &ctx.chrome(),
        ResetStep::Email,
        &FormData::default(),
        &FormErrors::new(),
        None,
    ))
}

/// Steps 1 to 3 of the reset flow. Each step re-renders itself on failure and
/// advances on success; the e-mail rides along as a hidden field.
pub fn forgot_step(req: &mut Request, ctx: &Ctx, step: ResetStep) -> ResultResp {
    let form = read_form(req)?;
    let page = |step: ResetStep, form: &FormData, errors: &FormErrors, flash: Option<(NoticeKind, &str)>| {
        html_response(pages::forgot_password_page(&ctx.chrome(), step, form, errors, flash))
    };
    let failed = |e: crate::webhooks::WebhookError| {
        page(step, &form, &FormErrors::new(), Some((NoticeKind::Error, &e.user_message())))
    };

    match step {
        ResetStep::Email => {
            let payload = match validate_forgot_email(&form) {
                Ok(p) => p,
                Err(errors) => return page(step, &form, &errors, None),
            };
            match ctx.app.backend.forgot_password(&payload) {
                Ok(reply) => {
                    let next = FormData::from_pairs(&[("email", payload.email.as_str())]);
                    page(
                        ResetStep::Code,
                        &next,
                        &FormErrors::new(),
                        Some((NoticeKind::Success, &reply.message())),
                    )
                }
                Err(e) => failed(e),
            }
        }
        ResetStep::Code => {
            let payload = match validate_reset_code(&form) {
                Ok(p) => p,
                Err(errors) => return page(step, &form, &errors, None),
            };
            match ctx.app.backend.verify_reset_code(&payload) {
                Ok(reply) => {
                    let next = FormData::from_pairs(&[("email", payload.email.as_str())]);
                    page(
                        ResetStep::NewPassword,
                        &next,
                        &FormErrors::new(),
                        Some((NoticeKind::Success, &reply.message())),
                    )
                }
                Err(e) => failed(e),
            }
        }
        ResetStep::NewPassword => {
            let payload = match validate_reset_password(&form) {
                Ok(p) => p,
                Err(errors) => return page(step, &form, &errors, None),
            };
            match ctx.app.backend.reset_password(&payload) {
                Ok(_) => redirect("/login?reset=1"),
                Err(e) => failed(e),
            }
        }
    }
}

use crate::app::{now_unix, App, Ctx};
use crate::auth::SessionContext;
use crate::domain::ListingKind;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::routes::{agent, auth, intake, listings, pages};
use crate::templates::pages::ResetStep;
use astra::Request;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let now = now_unix();
    let session = SessionContext::resolve(&req, &app.db, &app.config.session.cookie_name, now)?;
    let ctx = Ctx { app, session, now };

    // Owned so handlers can borrow the request mutably for the body.
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => pages::home(&ctx),
        ("GET", "/static/main.css") => pages::stylesheet(),
        ("GET", "/about") => pages::about(&ctx),
        ("GET", "/contact") => pages::contact(&ctx),

        ("GET", "/signup") => auth::signup_form(&ctx),
        ("POST", "/signup") => auth::signup_submit(&mut req, &ctx),
        ("POST", "/signup/verify") => auth::signup_verify(&mut req, &ctx),
        ("GET", "/login") => auth::login_form(&req, &ctx),
        ("POST", "/login") => auth::login_submit(&mut req, &ctx),
        ("POST", "/logout") => auth::logout(&ctx),
        ("GET", "/forgot-password") => auth::forgot_form(&ctx),
        ("POST", "/forgot-password") => auth::forgot_step(&mut req, &ctx, ResetStep::Email),
        ("POST", "/forgot-password/verify") => auth::forgot_step(&mut req, &ctx, ResetStep::Code),
        ("POST", "/forgot-password/reset") => {
            auth::forgot_step(&mut req, &ctx, ResetStep::NewPassword)
        }

        ("GET", "/dashboard") => pages::dashboard(&req, &ctx),
        ("GET", "/dashboard/add-buyer") => intake::buyer_form(&ctx),
        ("POST", "/dashboard/add-buyer") => intake::buyer_submit(&mut req, &ctx),
        ("GET", "/dashboard/add-seller") => intake::seller_form(&ctx),
        ("POST", "/dashboard/add-seller") => intake::seller_submit(&mut req, &ctx),
        ("GET", "/dashboard/price-check") => intake::price_check_form(&ctx),
        ("POST", "/dashboard/price-check") => intake::price_check_submit(&mut req, &ctx),
        ("GET", "/dashboard/buyers") => listings::browse(&req, &ctx, ListingKind::Buyer),

        ("GET", "/listings") => listings::browse(&req, &ctx, ListingKind::Seller),
        ("GET", "/listings/details") => listings::details(&req, &ctx),
        ("GET", "/listings/edit") => listings::edit_form(&req, &ctx),
        ("POST", "/listings/edit") => listings::edit_submit(&mut req, &ctx),
        ("GET", "/listings/export") => listings::export(&req, &ctx),

        ("GET", "/connect-agent") => agent::connect_agent_form(&ctx),
        ("POST", "/connect-agent") => agent::connect_agent_submit(&mut req, &ctx),

        _ => Err(ServerError::NotFound),
    }
}

use crate::app::Ctx;
use crate::forms::query_params;
use crate::responses::{css_response, html_response, ResultResp};
use crate::templates::components::NoticeKind;
use crate::templates::pages;
use astra::Request;

const MAIN_CSS: &str = include_str!("../../static/main.css");

pub fn stylesheet() -> ResultResp {
    css_response(MAIN_CSS)
}

pub fn home(ctx: &Ctx) -> ResultResp {
    html_response(pages::home_page(&ctx.chrome()))
}

pub fn about(ctx: &Ctx) -> ResultResp {
    html_response(pages::about_page(&ctx.chrome()))
}

pub fn contact(ctx: &Ctx) -> ResultResp {
    html_response(pages::contact_page(&ctx.chrome()))
}

/// Outcome notices passed across a post-redirect-get.
fn dashboard_notice(code: &str) -> Option<&'static str> {
    match code {
        "buyer-added" => Some("Buyer information submitted successfully."),
        "seller-added" => Some("Seller information submitted successfully."),
        _ => None,
    }
}

pub fn dashboard(req: &Request, ctx: &Ctx) -> ResultResp {
    let user = ctx.session.require_user()?;
    let query = query_params(req);
    let flash = query
        .get("notice")
        .and_then(|c| dashboard_notice(c))
        .map(|m| (NoticeKind::Success, m));
    html_response(pages::dashboard_page(&ctx.chrome(), user, flash))
}

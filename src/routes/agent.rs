use crate::app::Ctx;
use crate::forms::agent_form::validate_agent_query;
use crate::forms::{read_form, FormData, FormErrors};
use crate::responses::{html_response, ResultResp};
use crate::templates::components::NoticeKind;
use crate::templates::pages;
use astra::Request;

pub fn connect_agent_form(ctx: &Ctx) -> ResultResp {
    html_response(pages::connect_agent_page(
        &ctx.chrome(),
        &FormData::default(),
        &FormErrors::new(),
        None,
        None,
    ))
}

pub fn connect_agent_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    let form = read_form(req)?;

    let query = match validate_agent_query(&form) {
        Ok(q) => q,
        Err(errors) => {
            return html_response(pages::connect_agent_page(&ctx.chrome(), &form, &errors, None, None))
        }
    };

    match ctx.app.matcher.recommend(&query) {
        Ok(agents) => {
            tracing::info!(count = agents.len(), location = %query.location, "agents recommended");
            html_response(pages::connect_agent_page(
                &ctx.chrome(),
                &form,
                &FormErrors::new(),
                Some(&agents),
                None,
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "agent matching failed");
            html_response(pages::connect_agent_page(
                &ctx.chrome(),
                &form,
                &FormErrors::new(),
                None,
                Some((NoticeKind::Error, "Failed to find agents. Please try again later.")),
            ))
        }
    }
}

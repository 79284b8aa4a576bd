// routes/intake.rs
//
// Buyer and seller intake plus the AI price check. Intake is two-step: the
// first valid POST renders a preview, a POST carrying `confirm=1` submits.

use crate::app::Ctx;
use crate::forms::listing_forms::{
    take_uploaded_image, validate_buyer, validate_price_prompt, validate_seller,
};
use crate::forms::{read_form, FormData, FormErrors};
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::components::NoticeKind;
use crate::templates::pages::{self, payload_rows, Preview};
use astra::Request;

/// Defaults the intake forms open with.
pub fn buyer_defaults() -> FormData {
    FormData::from_pairs(&[
        ("property_type", "House"),
        ("construction_status", "Ready to move"),
    ])
}

pub fn seller_defaults() -> FormData {
    FormData::from_pairs(&[
        ("price_currency", "USD"),
        ("property_type", "House"),
        ("area_unit", "sq ft"),
        ("construction_status", "Ready to move"),
    ])
}

/// A currency switch invalidates the chosen bracket.
pub fn reset_bracket_on_currency_change(form: &mut FormData) -> bool {
    let switched = form.is_set("applied_currency") && form.get("applied_currency") != form.get("price_currency");
    if switched {
        form.set("price_range", "");
    }
    switched
}

pub fn buyer_form(ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    html_response(pages::buyer_form_page(
        &ctx.chrome(),
        &buyer_defaults(),
        &FormErrors::new(),
        None,
    ))
}

pub fn buyer_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    let form = read_form(req)?;
    let form_page = |errors: &FormErrors, flash: Option<(NoticeKind, &str)>| {
        html_response(pages::buyer_form_page(&ctx.chrome(), &form, errors, flash))
    };

    if form.is_set("edit") {
        return form_page(&FormErrors::new(), None);
    }

    let payload = match validate_buyer(&form) {
        Ok(p) => p,
        Err(errors) => return form_page(&errors, None),
    };

    if !form.is_set("confirm") {
        return html_response(pages::preview_page(
            &ctx.chrome(),
            &Preview {
                title: "Confirm Buyer Details",
                action: "/dashboard/add-buyer",
                rows: payload_rows(&payload),
                image: None,
                form: &form,
            },
        ));
    }

    match ctx.app.backend.add_buyer(&payload) {
        Ok(_) => {
            tracing::info!("buyer submitted");
            redirect("/dashboard?notice=buyer-added")
        }
        Err(e) => form_page(&FormErrors::new(), Some((NoticeKind::Error, &e.user_message()))),
    }
}

pub fn seller_form(ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    html_response(pages::seller_form_page(
        &ctx.chrome(),
        &seller_defaults(),
        &FormErrors::new(),
        None,
    ))
}

pub fn seller_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    let mut form = read_form(req)?;
    take_uploaded_image(&mut form);
    let switched = reset_bracket_on_currency_change(&mut form);

    let form_page = |form: &FormData, errors: &FormErrors, flash: Option<(NoticeKind, &str)>| {
        html_response(pages::seller_form_page(&ctx.chrome(), form, errors, flash))
    };

    if form.is_set("refresh") || form.is_set("edit") {
        return form_page(&form, &FormErrors::new(), None);
    }
    if switched {
        return form_page(
            &form,
            &FormErrors::new(),
            Some((NoticeKind::Info, "Currency changed. Please pick a price range again.")),
        );
    }

    let payload = match validate_seller(&form) {
        Ok(p) => p,
        Err(errors) => return form_page(&form, &errors, None),
    };

    if !form.is_set("confirm") {
        let mut rows = payload_rows(&payload.listing);
        if let Some(img) = &payload.image {
            let shown = if img.starts_with("data:") { "Uploaded image".to_string() } else { img.clone() };
            rows.push(("Image", shown));
        }
        return html_response(pages::preview_page(
            &ctx.chrome(),
            &Preview {
                title: "Confirm Seller Details",
                action: "/dashboard/add-seller",
                rows,
                image: payload.image.as_deref(),
                form: &form,
            },
        ));
    }

    match ctx.app.backend.add_seller(&payload) {
        Ok(_) => {
            tracing::info!("seller submitted");
            redirect("/dashboard?notice=seller-added")
        }
        Err(e) => form_page(&form, &FormErrors::new(), Some((NoticeKind::Error, &e.user_message()))),
    }
}

pub fn price_check_form(ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    html_response(pages::price_check_page(
        &ctx.chrome(),
        &FormData::default(),
        &FormErrors::new(),
        None,
        None,
    ))
}

pub fn price_check_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    let form = read_form(req)?;

    let payload = match validate_price_prompt(&form) {
        Ok(p) => p,
        Err(errors) => {
            return html_response(pages::price_check_page(&ctx.chrome(), &form, &errors, None, None))
        }
    };

    match ctx.app.backend.check_price(&payload) {
        Ok(reply) => html_response(pages::price_check_page(
            &ctx.chrome(),
            &form,
            &FormErrors::new(),
            Some(&reply.output_text()),
            Some((NoticeKind::Success, "Received a response from the AI assistant.")),
        )),
        Err(e) => html_response(pages::price_check_page(
            &ctx.chrome(),
            &form,
            &FormErrors::new(),
            None,
            Some((NoticeKind::Error, &e.user_message())),
        )),
    }
}

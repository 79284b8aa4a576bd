// routes/listings.rs
//
// Browse, details, edit and export for listings fetched from the webhook
// backend. Every browse refreshes the shared feed; filtering goes through the
// feed's memoised projection.

use crate::app::{App, Ctx};
use crate::domain::normalize::{normalize_listings, Normalized};
use crate::domain::{FilterCriteria, ListingKind, ListingRecord};
use crate::errors::ServerError;
use crate::forms::listing_forms::{edit_form_from_record, validate_edit};
use crate::forms::{query_params, read_form, FormData, FormErrors};
use crate::responses::{html_response, redirect, ResultResp};
use crate::routes::intake::reset_bracket_on_currency_change;
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::components::listing::encode;
use crate::templates::components::NoticeKind;
use crate::templates::pages::{self, payload_rows, BrowseVm, Preview};
use astra::Request;

/// What a fetch left behind, for the flash banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Empty,
    UnexpectedFormat,
    Failed(String),
}

impl LoadOutcome {
    pub fn flash(&self) -> Option<(NoticeKind, String)> {
        match self {
            LoadOutcome::Loaded => None,
            LoadOutcome::Empty => Some((NoticeKind::Info, "No listings found".into())),
            LoadOutcome::UnexpectedFormat => Some((
                NoticeKind::Error,
                "Unexpected format: Could not parse listings from the server.".into(),
            )),
            LoadOutcome::Failed(msg) => {
                Some((NoticeKind::Error, format!("Failed to fetch listings: {msg}")))
            }
        }
    }
}

/// Fetch one kind of listings and hand the result to its feed.
///
/// Failures and unparseable payloads are applied as an empty collection so
/// the page shows "nothing loaded" rather than stale data from an older fetch.
pub fn load_listings(app: &App, kind: ListingKind) -> LoadOutcome {
    let feed = app.feed(kind);
    let ticket = feed.begin_fetch();

    let (records, outcome) = match app.backend.fetch_listings(kind) {
        Ok(payload) => match normalize_listings(&payload) {
            Normalized::Records(records) if records.is_empty() => (records, LoadOutcome::Empty),
            Normalized::Records(records) => (records, LoadOutcome::Loaded),
            Normalized::UnexpectedFormat => {
                tracing::warn!(kind = kind.label(), "listing payload was not an array");
                (Vec::new(), LoadOutcome::UnexpectedFormat)
            }
        },
        Err(e) => {
            tracing::warn!(kind = kind.label(), error = %e, "listing fetch failed");
            (Vec::new(), LoadOutcome::Failed(e.user_message()))
        }
    };

    let applied = feed.complete(ticket, records);
    tracing::debug!(kind = kind.label(), applied, ?outcome, "listing fetch finished");
    outcome
}

fn browse_action(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Seller => "/listings",
        ListingKind::Buyer => "/dashboard/buyers",
    }
}

fn export_href(criteria: &FilterCriteria) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(criteria.to_query_pairs())
        .finish();
    if query.is_empty() {
        "/listings/export".to_string()
    } else {
        format!("/listings/export?{query}")
    }
}

pub fn browse(req: &Request, ctx: &Ctx, kind: ListingKind) -> ResultResp {
    if kind == ListingKind::Buyer {
        ctx.session.require_user()?;
    }

    let params = query_params(req);
    let criteria = FilterCriteria::from_query(&params);
    let outcome = load_listings(ctx.app, kind);
    let view = ctx.app.feed(kind).filtered(&criteria);

    let export = (kind == ListingKind::Seller && ctx.session.is_authenticated())
        .then(|| export_href(&criteria));
    let flash = outcome.flash().or_else(|| {
        FilterCriteria::bracket_reset_by_query(&params).then(|| {
            (NoticeKind::Info, "Currency changed. Please pick a price range again.".to_string())
        })
    });

    html_response(pages::browse_page(
        &ctx.chrome(),
        &BrowseVm {
            kind,
            action: browse_action(kind),
            criteria: &criteria,
            records: view.records.as_deref(),
            total: view.total,
            flash: flash.as_ref().map(|(k, m)| (*k, m.as_str())),
            export_href: export,
        },
    ))
}

/// Seller record by id from the current snapshot, fetching first when the
/// feed has never loaded.
fn find_seller(app: &App, id: &str) -> Option<ListingRecord> {
    let snapshot = match app.sellers.snapshot() {
        Some(s) => s,
        None => {
            load_listings(app, ListingKind::Seller);
            app.sellers.snapshot()?
        }
    };
    snapshot.iter().find(|r| r.id.as_deref() == Some(id)).cloned()
}

fn required_id(req: &Request) -> Result<String, ServerError> {
    query_params(req)
        .get("id")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(ServerError::NotFound)
}

pub fn details(req: &Request, ctx: &Ctx) -> ResultResp {
    let id = required_id(req)?;
    let record = find_seller(ctx.app, &id).ok_or(ServerError::NotFound)?;
    let flash = query_params(req)
        .contains_key("updated")
        .then_some((NoticeKind::Success, "Listing updated successfully."));
    html_response(pages::listing_details_page(
        &ctx.chrome(),
        &record,
        ctx.session.is_authenticated(),
        flash,
    ))
}

pub fn edit_form(req: &Request, ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    let id = required_id(req)?;
    let record = find_seller(ctx.app, &id).ok_or(ServerError::NotFound)?;
    html_response(pages::edit_listing_page(
        &ctx.chrome(),
        &edit_form_from_record(&record),
        &FormErrors::new(),
        None,
    ))
}

pub fn edit_submit(req: &mut Request, ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    let id = required_id(req)?;
    let mut form = read_form(req)?;
    form.set("id", id.as_str());
    let switched = reset_bracket_on_currency_change(&mut form);

    let form_page = |form: &FormData, errors: &FormErrors, flash: Option<(NoticeKind, &str)>| {
        html_response(pages::edit_listing_page(&ctx.chrome(), form, errors, flash))
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

    let payload = match validate_edit(&form) {
        Ok(p) => p,
        Err(errors) => return form_page(&form, &errors, None),
    };

    if !form.is_set("confirm") {
        let action = format!("/listings/edit?id={}", encode(&id));
        return html_response(pages::preview_page(
            &ctx.chrome(),
            &Preview {
                title: "Confirm Listing Changes",
                action: &action,
                rows: payload_rows(&payload.listing),
                image: None,
                form: &form,
            },
        ));
    }

    match ctx.app.backend.edit_listing(&payload) {
        Ok(_) => {
            tracing::info!(id = %id, "listing edited");
            // The next read must not serve the pre-edit snapshot.
            load_listings(ctx.app, ListingKind::Seller);
            redirect(&format!("/listings/details?id={}&updated=1", encode(&id)))
        }
        Err(e) => form_page(&form, &FormErrors::new(), Some((NoticeKind::Error, &e.user_message()))),
    }
}

pub fn export(req: &Request, ctx: &Ctx) -> ResultResp {
    ctx.session.require_user()?;
    let criteria = FilterCriteria::from_query(&query_params(req));

    let records = export_records(ctx.app, &criteria)?;
    let rows: Vec<&ListingRecord> = records.iter().collect();
    tracing::info!(rows = rows.len(), "exporting seller listings");
    export_listings_xlsx(&rows, ListingKind::Seller)
}

/// Seller records matching `criteria`, fetching first when the feed has never
/// loaded. A failed first fetch is an upstream error rather than an empty file.
fn export_records(app: &App, criteria: &FilterCriteria) -> Result<Vec<ListingRecord>, ServerError> {
    if app.sellers.snapshot().is_none() {
        if let LoadOutcome::Failed(msg) = load_listings(app, ListingKind::Seller) {
            return Err(ServerError::Upstream(msg));
        }
    }
    Ok(app.sellers.filtered(criteria).records.unwrap_or_default())
}

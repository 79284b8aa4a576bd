// app.rs
use crate::ai::AgentMatcher;
use crate::auth::SessionContext;
use crate::config::AppConfig;
use crate::db::Database;
use crate::domain::{ListingFeed, ListingKind};
use crate::templates::Chrome;
use crate::webhooks::Backend;
use std::time::{SystemTime, UNIX_EPOCH};

/// Everything a request handler can reach. Built once in `main` and shared by
/// every astra worker.
pub struct App {
    pub db: Database,
    pub config: AppConfig,
    pub backend: Box<dyn Backend>,
    pub matcher: Box<dyn AgentMatcher>,
    pub sellers: ListingFeed,
    pub buyers: ListingFeed,
}

impl App {
    pub fn new(
        db: Database,
        config: AppConfig,
        backend: Box<dyn Backend>,
        matcher: Box<dyn AgentMatcher>,
    ) -> Self {
        Self {
            db,
            config,
            backend,
            matcher,
            sellers: ListingFeed::new(),
            buyers: ListingFeed::new(),
        }
    }

    pub fn feed(&self, kind: ListingKind) -> &ListingFeed {
        match kind {
            ListingKind::Seller => &self.sellers,
            ListingKind::Buyer => &self.buyers,
        }
    }
}

/// Per-request state handed to route handlers.
pub struct Ctx<'a> {
    pub app: &'a App,
    pub session: SessionContext,
    pub now: i64,
}

impl<'a> Ctx<'a> {
    pub fn chrome(&self) -> Chrome<'_> {
        Chrome {
            user: self.session.user(),
            site: &self.app.config.site,
        }
    }
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

// src/auth/context.rs
use crate::auth::sessions::{load_session, SessionUser};
use crate::db::connection::Database;
use crate::errors::ServerError;
use astra::Request;

/// Per-request view of "who is signed in". Resolved once by the router; pages
/// and guards read it instead of re-checking cookies or expiry themselves.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<SessionUser>,
    token: Option<String>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Read the session cookie and validate it against the store. Expired,
    /// revoked, or unknown tokens all resolve to anonymous.
    pub fn resolve(
        req: &Request,
        db: &Database,
        cookie_name: &str,
        now: i64,
    ) -> Result<Self, ServerError> {
        let Some(token) = cookie_value(req, cookie_name) else {
            return Ok(Self::anonymous());
        };

        let session = db.with_conn(|conn| load_session(conn, &token, now))?;
        Ok(match session {
            Some(s) => Self {
                user: Some(s.user),
                token: Some(token),
            },
            None => Self::anonymous(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Route guard.
    pub fn require_user(&self) -> Result<&SessionUser, ServerError> {
        self.user.as_ref().ok_or(ServerError::LoginRequired)
    }

    /// Raw token of the live session, used by logout.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Value of a cookie from the `Cookie` header(s).
pub fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(name: &str, token: &str, max_age_secs: i64) -> String {
    format!("{name}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

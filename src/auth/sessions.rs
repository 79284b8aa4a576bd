// src/auth/sessions.rs
use crate::auth::token::{generate_session_token, hash_token};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Who is signed in, as reported by the login webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub user: SessionUser,
    pub expires_at: i64,
}

/// Insert a session row and return the raw token for the cookie.
pub fn create_session(
    conn: &Connection,
    user: &SessionUser,
    now: i64,
    ttl_secs: i64,
) -> Result<String, ServerError> {
    let raw_token = generate_session_token();
    let hash = hash_token(&raw_token);
    let expires_at = now + ttl_secs;

    conn.execute(
        r#"
        insert into sessions (token_hash, user_name, user_email, created_at, expires_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![hash.as_slice(), user.name, user.email, now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Look up a live (unexpired, unrevoked) session by raw token.
pub fn load_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<ActiveSession>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select user_name, user_email, expires_at
        from sessions
        where token_hash = ?
          and expires_at > ?
          and revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(ActiveSession {
                user: SessionUser {
                    name: row.get(0)?,
                    email: row.get(1)?,
                },
                expires_at: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Delete expired or revoked rows. Returns how many were removed.
pub fn purge_sessions(conn: &Connection, now: i64) -> Result<usize, ServerError> {
    conn.execute(
        "delete from sessions where expires_at <= ? or revoked_at is not null",
        params![now],
    )
    .map_err(|e| ServerError::DbError(format!("purge sessions failed: {e}")))
}

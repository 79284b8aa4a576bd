use crate::ai::agent_match::AgentMatchError;
use crate::ai::{AgentMatcher, AgentQuery, RecommendedAgent};
use crate::app::{now_unix, App};
use crate::auth::sessions::{create_session, SessionUser};
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::webhooks::client::Endpoint;
use crate::webhooks::{Backend, WebhookError};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::Value;
use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static DB_SEQ: AtomicU64 = AtomicU64::new(0);

/// Fresh schema in a per-test file so parallel tests never share sessions.
pub fn init_test_db() -> Database {
    let seq = DB_SEQ.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "estately_test_{}_{}.sqlite3",
        std::process::id(),
        seq
    ));
    let _ = std::fs::remove_file(&path);
    let db = Database::new(path);
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub type CallLog = Arc<Mutex<Vec<(Endpoint, Value)>>>;

/// Canned webhook backend. Unscripted endpoints answer `{}`.
#[derive(Default)]
pub struct StubBackend {
    replies: Vec<(Endpoint, Result<Value, String>)>,
    calls: CallLog,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, endpoint: Endpoint, body: Value) -> Self {
        self.replies.push((endpoint, Ok(body)));
        self
    }

    /// Fail the endpoint with a rejected status carrying `message`.
    pub fn fail(mut self, endpoint: Endpoint, message: &str) -> Self {
        self.replies.push((endpoint, Err(message.to_string())));
        self
    }

    /// Shared handle on the recorded calls; grab it before boxing the stub.
    pub fn log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

impl Backend for StubBackend {
    fn post(&self, endpoint: Endpoint, body: &Value) -> Result<Value, WebhookError> {
        self.calls.lock().unwrap().push((endpoint, body.clone()));
        match self.replies.iter().find(|(e, _)| *e == endpoint) {
            Some((_, Ok(v))) => Ok(v.clone()),
            Some((_, Err(msg))) => Err(WebhookError::Rejected {
                status: 400,
                message: msg.clone(),
            }),
            None => Ok(Value::Object(Default::default())),
        }
    }
}

pub struct StubMatcher {
    pub agents: Option<Vec<RecommendedAgent>>,
}

impl AgentMatcher for StubMatcher {
    fn recommend(&self, _query: &AgentQuery) -> Result<Vec<RecommendedAgent>, AgentMatchError> {
        self.agents.clone().ok_or(AgentMatchError::MissingApiKey)
    }
}

pub fn test_app(backend: StubBackend) -> App {
    test_app_with(backend, StubMatcher { agents: Some(Vec::new()) })
}

pub fn test_app_with(backend: StubBackend, matcher: StubMatcher) -> App {
    App::new(
        init_test_db(),
        AppConfig::default(),
        Box::new(backend),
        Box::new(matcher),
    )
}

/// Session cookie for a signed-in test user.
pub fn login_cookie(app: &App) -> String {
    let user = SessionUser {
        name: "Test Agent".into(),
        email: "agent@example.com".into(),
    };
    let token = app
        .db
        .with_conn(|conn| create_session(conn, &user, now_unix(), 3600))
        .expect("create session");
    format!("{}={}", app.config.session.cookie_name, token)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut b = Request::builder().method(Method::GET).uri(uri);
    if let Some(c) = cookie {
        b = b.header("Cookie", c);
    }
    b.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut b = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        b = b.header("Cookie", c);
    }
    b.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

/// Upload for one file input: field name, content type, bytes.
pub type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

/// `multipart/form-data` POST, the way a browser submits a form with a file input.
pub fn post_multipart(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<FilePart>,
    cookie: Option<&str>,
) -> Request<Body> {
    const BOUNDARY: &str = "----estately-test-boundary";
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    if let Some((name, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut b = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", format!("multipart/form-data; boundary={BOUNDARY}"));
    if let Some(c) = cookie {
        b = b.header("Cookie", c);
    }
    b.body(Body::from(body)).unwrap()
}

/// Route a request the way the server loop does, errors rendered as pages.
pub fn respond(req: Request<Body>, app: &App) -> Response {
    handle(req, app).unwrap_or_else(error_to_response)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Bodies the stub saw on `endpoint`, in call order.
pub fn calls_to(log: &CallLog, endpoint: Endpoint) -> Vec<Value> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|(e, _)| *e == endpoint)
        .map(|(_, v)| v.clone())
        .collect()
}

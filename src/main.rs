use crate::ai::GeminiMatcher;
use crate::app::{now_unix, App};
use crate::auth::sessions::purge_sessions;
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::webhooks::WebhookClient;
use astra::{Request, Server};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;

mod ai;
mod app;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod logging;
mod responses;
mod router;
mod routes;
mod spreadsheets;
mod templates;
mod webhooks;

#[cfg(test)]
mod tests;

/// Real-estate portal fronting the listing webhooks.
#[derive(Debug, Parser)]
#[command(name = "estately", version, about)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, env = "ESTATELY_CONFIG")]
    config: Option<PathBuf>,

    /// Override `server.bind_addr`.
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Verbose logging (ignored when RUST_LOG is set).
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let explicit = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match AppConfig::load(&config_path, explicit) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    logging::init(cli.debug, config.logging.level.as_deref());

    let addr: SocketAddr = match cli.addr {
        Some(a) => a,
        None => match config.server.bind_addr.parse() {
            Ok(a) => a,
            Err(e) => {
                tracing::error!(addr = %config.server.bind_addr, error = %e, "invalid bind address");
                std::process::exit(1);
            }
        },
    };

    let db = Database::new(&config.database.path);
    if let Err(e) = init_db(&db) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }
    match db.with_conn(|conn| purge_sessions(conn, now_unix())) {
        Ok(n) if n > 0 => tracing::info!(purged = n, "removed expired sessions"),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "session purge failed"),
    }

    let backend = match WebhookClient::new(&config.webhooks) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "webhook client setup failed");
            std::process::exit(1);
        }
    };
    let matcher = match GeminiMatcher::new(&config.ai) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "AI client setup failed");
            std::process::exit(1);
        }
    };

    let workers = config.server.max_workers;
    let app = App::new(db, config, Box::new(backend), Box::new(matcher));

    tracing::info!(%addr, workers, "starting server");
    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        };

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}

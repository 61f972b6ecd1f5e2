//! # weekday-formd — weekday form daemon
//!
//! Composition root that wires the clock, the page service and the HTTP
//! adapter together.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` (always on stderr; stdout may carry a CGI response)
//! - Construct the page service around the system clock
//! - When launched as a CGI script, answer that one request on stdout and exit
//! - Otherwise build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cgi;
mod config;

use tracing_subscriber::EnvFilter;

use weekday_form_adapter_http_axum::page::render_page;
use weekday_form_adapter_http_axum::router;
use weekday_form_adapter_http_axum::state::AppState;
use weekday_form_app::clock::SystemClock;
use weekday_form_app::services::page_service::PageService;

use crate::config::{Config, ConfigError};

/// Start-up and serving failures.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("configuration error")]
    Config(#[from] ConfigError),
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), AppError> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    let zone = config.time_zone()?;
    let service = PageService::new(SystemClock, zone, config.page.action.as_str());

    if cgi::is_cgi(|key| std::env::var(key).ok()) {
        let request = cgi::CgiRequest::from_lookup(|key| std::env::var(key).ok());
        tracing::debug!(?request, "answering CGI request");
        let mut stdout = std::io::stdout().lock();
        cgi::write_response(&mut stdout, &request, || {
            render_page(&service, &config.page.title)
        })?;
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(&config, service))
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}, falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn serve(config: &Config, service: PageService<SystemClock>) -> Result<(), AppError> {
    let zone = service.zone();
    let state = AppState::new(service, config.page.title.as_str());
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, %zone, action = %config.page.action, "weekday-formd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("weekday-formd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

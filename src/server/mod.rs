//! HTTP dashboard server
//!
//! Serves the interactive dashboard. Every request runs a complete render
//! pass on the blocking pool with a freshly loaded dataset; nothing is shared
//! between requests except the read-only configuration.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use log::info;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::analysis::SampleSize;
use crate::config::Config;
use crate::core::error::{Result, SentinelError};
use crate::reporting::{Section, escape_html, logging, render_page};

/// Query string of `GET /`
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    pub section: Option<String>,
    pub samples: Option<String>,
}

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

/// Build the application router
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(AppState {
            config: Arc::new(config),
        })
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| SentinelError::Server(format!("Could not bind {addr}: {e}")))?;
    info!("Dashboard listening on http://{addr}");
    serve_with_listener(listener, config).await
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve_with_listener(listener: TcpListener, config: Config) -> Result<()> {
    axum::serve(listener, router(config))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| SentinelError::Server(e.to_string()))
}

async fn health() -> &'static str {
    "ok"
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> (StatusCode, Html<String>) {
    let config = Arc::clone(&state.config);
    let (status, body) =
        match tokio::task::spawn_blocking(move || render_request(&config, &query)).await {
            Ok(response) => response,
            Err(e) => {
                logging::log_error("Render task failed", Some(&e));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_page(StatusCode::INTERNAL_SERVER_ERROR, "Render task failed"),
                )
            }
        };
    (status, Html(body))
}

/// Resolve the query and run one render pass
pub fn render_request(config: &Config, query: &PageQuery) -> (StatusCode, String) {
    let section = match query.section.as_deref() {
        None | Some("") => Section::default(),
        Some(value) => match Section::from_slug(value) {
            Some(section) => section,
            None => {
                let message = format!(
                    "Unknown section '{value}'. Expected one of: {}.",
                    Section::SLUGS.join(", ")
                );
                logging::log_warning(&message);
                return (
                    StatusCode::BAD_REQUEST,
                    error_page(StatusCode::BAD_REQUEST, &message),
                );
            }
        },
    };

    let sample_size = parse_samples(query.samples.as_deref(), config);
    logging::log_request(section.slug(), sample_size.get());

    match render_page(config, section, sample_size, true) {
        Ok(html) => (StatusCode::OK, html),
        Err(e) => {
            logging::log_error("Could not render dashboard", Some(&e));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_page(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
            )
        }
    }
}

/// Slider value from the query, clamped into range; unparsable falls back to the default
fn parse_samples(raw: Option<&str>, config: &Config) -> SampleSize {
    match raw.map(|value| value.trim().parse::<i64>()) {
        Some(Ok(n)) => SampleSize::clamped(usize::try_from(n.max(0)).unwrap_or(usize::MAX)),
        Some(Err(_)) => {
            logging::log_warning("Ignoring non-numeric samples parameter");
            config.sample_size()
        }
        None => config.sample_size(),
    }
}

fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>{status}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 3rem; color: #1e293b; }}
        .alert {{ padding: 1rem 1.25rem; border-radius: 8px; color: #b91c1c; background-color: #fef2f2; }}
    </style>
</head>
<body>
    <h1>{status}</h1>
    <div class="alert">{message}</div>
    <p><a href="/">Volver al inicio</a></p>
</body>
</html>"#,
        status = status,
        message = escape_html(message)
    )
}

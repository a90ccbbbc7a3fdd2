use dotenvy::dotenv;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;

mod config;
mod error;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod utils {
    pub mod mail_utils;
}

use config::{RelayConfig, ServerConfig};
use handlers::contact_handlers;
use utils::mail_utils::{LogMailer, MailTransport, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    relay: RelayConfig,
    mailer: Arc<dyn MailTransport>,
}

fn build_mailer(relay: &RelayConfig) -> anyhow::Result<Arc<dyn MailTransport>> {
    match &relay.smtp {
        Some(smtp) => Ok(Arc::new(SmtpMailer::new(smtp)?)),
        None => {
            tracing::warn!("No SMTP configured, contact emails will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origin = match frontend_url.and_then(|url| url.parse::<HeaderValue>().ok()) {
        Some(url) => AllowOrigin::exact(url),
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        // Path the site's form has always posted to
        .route("/sendemail", post(contact_handlers::send_contact_email))
        .route("/api/contact", post(contact_handlers::send_contact_email))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let ServerConfig { bind_addr, frontend_url, sentry_dsn, relay } = config::from_env()?;

    let _guard = sentry::init((sentry_dsn, sentry::ClientOptions {
        release: sentry::release_name!(),
        ..Default::default()
    }));

    if relay.recipient.is_empty() {
        tracing::warn!("CONTACT_RECIPIENT is not set, every submission will be refused");
    }

    let mailer = build_mailer(&relay)?;
    let state = Arc::new(AppState { relay, mailer });

    let app = build_router(state).layer(cors_layer(frontend_url.as_deref()));

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Contact relay listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body, body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_ok() {
        let state = Arc::new(AppState {
            relay: RelayConfig {
                recipient: String::new(),
                sender: config::DEFAULT_SENDER.to_string(),
                subject: config::DEFAULT_SUBJECT.to_string(),
                smtp: None,
            },
            mailer: Arc::new(LogMailer),
        });
        let request = Request::get("/api/health").body(Body::empty()).expect("request");
        let response = build_router(state).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(body.as_ref(), b"OK");
    }

    #[test]
    fn development_relay_uses_log_mailer() {
        let relay = RelayConfig {
            recipient: "sales@teslawatt.com".to_string(),
            sender: config::DEFAULT_SENDER.to_string(),
            subject: config::DEFAULT_SUBJECT.to_string(),
            smtp: None,
        };
        assert!(build_mailer(&relay).is_ok());
    }
}

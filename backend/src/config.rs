use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_SENDER: &str = "office@teslawatt.com";
pub const DEFAULT_SUBJECT: &str = "New email from Request Demo form";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Everything the relay needs to know about where mail goes and how it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// Empty means the site owner never configured one; the relay refuses to run then.
    pub recipient: String,
    pub sender: String,
    pub subject: String,
    /// `None` in development, where mail is only logged.
    pub smtp: Option<SmtpSettings>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub frontend_url: Option<String>,
    pub sentry_dsn: Option<String>,
    pub relay: RelayConfig,
}

impl RelayConfig {
    pub fn is_development(environment: &str) -> bool {
        environment == "development"
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn load_smtp() -> Result<SmtpSettings, ConfigError> {
    let port = match env::var("SMTP_PORT") {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { name: "SMTP_PORT", value: raw })?,
        _ => DEFAULT_SMTP_PORT,
    };

    Ok(SmtpSettings {
        host: required("SMTP_HOST")?,
        port,
        username: required("SMTP_USERNAME")?,
        password: required("SMTP_PASSWORD")?,
    })
}

/// Reads and validates the process environment. Call after `dotenv()`.
pub fn from_env() -> Result<ServerConfig, ConfigError> {
    let environment = var_or("ENVIRONMENT", "production"); // 'development' logs mail instead of sending

    let smtp = if RelayConfig::is_development(&environment) {
        None
    } else {
        Some(load_smtp()?)
    };

    // An unset recipient is not a startup error; each request reports it instead.
    let relay = RelayConfig {
        recipient: env::var("CONTACT_RECIPIENT").unwrap_or_default().trim().to_string(),
        sender: var_or("CONTACT_SENDER", DEFAULT_SENDER),
        subject: var_or("CONTACT_SUBJECT", DEFAULT_SUBJECT),
        smtp,
    };

    let raw_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
    let bind_addr = raw_addr
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::Invalid { name: "BIND_ADDR", value: raw_addr.clone() })?;

    Ok(ServerConfig {
        bind_addr,
        frontend_url: env::var("FRONTEND_URL").ok().filter(|v| !v.is_empty()),
        sentry_dsn: env::var("SENTRY_DSN").ok().filter(|v| !v.is_empty()),
        relay,
    })
}

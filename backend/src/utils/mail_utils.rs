use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

use crate::config::SmtpSettings;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address {address}: {reason}")]
    Address { address: String, reason: String },
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A message ready to hand to a transport. The body is HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait MailTransport: Send + Sync {
    /// Delivers one message. Blocking; called off the async runtime.
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// Same character filter PHP applies with FILTER_SANITIZE_EMAIL: letters, digits and
/// ``!#$%&'*+-=?^_`{|}~@.[]`` survive, everything else is dropped.
pub fn sanitize_email(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(*c))
        .collect()
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse::<Mailbox>().map_err(|e| MailError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

pub fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .to(parse_mailbox(&mail.to)?)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_HTML);

    if let Some(reply_to) = &mail.reply_to {
        match parse_mailbox(reply_to) {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            // The visitor typed something unusable; still deliver, just without Reply-To.
            Err(e) => tracing::warn!("Dropping Reply-To header: {}", e),
        }
    }

    Ok(builder.body(mail.html_body.clone())?)
}

pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let transport = SmtpTransport::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = build_message(mail)?;
        self.transport.send(&message)?;
        Ok(())
    }
}

/// Development transport: builds the message so header problems still surface, then
/// logs it instead of talking to an SMTP server.
pub struct LogMailer;

impl MailTransport for LogMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = build_message(mail)?;
        tracing::info!(
            to = %mail.to,
            reply_to = ?mail.reply_to,
            size = message.formatted().len(),
            "Development mode, not sending contact email"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mail() -> OutgoingMail {
        OutgoingMail {
            from: "office@teslawatt.com".to_string(),
            to: "sales@teslawatt.com".to_string(),
            reply_to: Some("visitor@example.com".to_string()),
            subject: "New email from Request Demo form".to_string(),
            html_body: "<p>Hello</p>".to_string(),
        }
    }

    #[test]
    fn sanitize_strips_characters_not_allowed_in_addresses() {
        assert_eq!(sanitize_email("  jane.doe@example.com \n"), "jane.doe@example.com");
        assert_eq!(sanitize_email("jane doe<script>@ex(ample).com"), "janedoescript@example.com");
        assert_eq!(sanitize_email("a\r\nBcc: evil@x.com"), "aBccevil@x.com");
        assert_eq!(sanitize_email("o'brien+tag@[127.0.0.1]"), "o'brien+tag@[127.0.0.1]");
        assert_eq!(sanitize_email("jürgen@example.com"), "jrgen@example.com");
    }

    #[test]
    fn message_carries_reply_to_and_html_content_type() {
        let message = build_message(&sample_mail()).expect("message");
        let raw = String::from_utf8(message.formatted()).expect("utf8");
        assert!(raw.contains("From: office@teslawatt.com"));
        assert!(raw.contains("Reply-To: visitor@example.com"));
        assert!(raw.contains("To: sales@teslawatt.com"));
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("Subject: New email from Request Demo form"));
    }

    #[test]
    fn unusable_reply_to_is_dropped_not_fatal() {
        let mut mail = sample_mail();
        mail.reply_to = Some("not-an-address".to_string());
        let message = build_message(&mail).expect("message");
        let raw = String::from_utf8(message.formatted()).expect("utf8");
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn bad_recipient_is_an_address_error() {
        let mut mail = sample_mail();
        mail.to = "nobody".to_string();
        match build_message(&mail) {
            Err(MailError::Address { address, .. }) => assert_eq!(address, "nobody"),
            other => panic!("expected address error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn log_mailer_accepts_valid_mail() {
        assert!(LogMailer.send(&sample_mail()).is_ok());
    }
}

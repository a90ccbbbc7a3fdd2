use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, State},
    Json,
};
use tracing::{error, info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::handlers::contact_dtos::{AjaxResponse, ContactForm};
use crate::utils::mail_utils::{sanitize_email, MailTransport, OutgoingMail};
use crate::AppState;

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "mail delivery task panicked".to_string()
    }
}

/// Runs one contact submission through the relay: configuration check, required
/// fields, address sanitizing, then a single delivery attempt.
pub async fn relay_contact(
    config: &RelayConfig,
    mailer: Arc<dyn MailTransport>,
    form: ContactForm,
) -> Result<(), RelayError> {
    if config.recipient.is_empty() {
        return Err(RelayError::RecipientNotSet);
    }

    let (Some(email), Some(content)) = (form.email, form.emailcontent) else {
        return Err(RelayError::MissingRequiredFields);
    };

    let reply_to = sanitize_email(&email);
    let mail = OutgoingMail {
        from: config.sender.clone(),
        to: config.recipient.clone(),
        reply_to: (!reply_to.is_empty()).then_some(reply_to),
        subject: config.subject.clone(),
        html_body: content,
    };

    match tokio::task::spawn_blocking(move || mailer.send(&mail)).await {
        Ok(sent) => sent.map_err(RelayError::from),
        Err(join_error) if join_error.is_panic() => {
            Err(RelayError::Unexpected(panic_message(join_error.into_panic())))
        }
        Err(join_error) => Err(RelayError::Unexpected(join_error.to_string())),
    }
}

pub async fn send_contact_email(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Result<Json<AjaxResponse>, RelayError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Unreadable contact form body: {}", rejection);
            ContactForm::default()
        }
    };

    match relay_contact(&state.relay, state.mailer.clone(), form).await {
        Ok(()) => {
            info!("Contact email relayed to {}", state.relay.recipient);
            Ok(Json(AjaxResponse::success()))
        }
        Err(e) => {
            match &e {
                RelayError::Transport(_) | RelayError::Unexpected(_) => {
                    error!("Contact relay failed ({}): {}", e.code(), e)
                }
                _ => warn!("Contact relay rejected request ({})", e.code()),
            }
            Err(e)
        }
    }
}

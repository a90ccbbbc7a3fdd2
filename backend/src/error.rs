use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::handlers::contact_dtos::AjaxResponse;
use crate::utils::mail_utils::MailError;

/// Terminal failures of one relay request. None are retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("RECIPIENT email address is not set. Please configure the script.")]
    RecipientNotSet,
    #[error("MISSING_REQUIRED_FIELDS should not be occurred.")]
    MissingRequiredFields,
    #[error("mail transport failed: {0}")]
    Transport(#[from] MailError),
    #[error("unexpected failure while sending: {0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::RecipientNotSet => "RECIPIENT_IS_NOT_SET",
            RelayError::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            RelayError::Transport(_) | RelayError::Unexpected(_) => "ERROR_AT_PHPMAIL",
        }
    }

    pub fn to_ajax(&self) -> AjaxResponse {
        let details = match self {
            RelayError::Transport(e) => json!({
                "error_information": { "message": e.to_string() }
            }),
            RelayError::Unexpected(message) => json!({ "error_message": message }),
            other => json!({ "error_message": other.to_string() }),
        };
        AjaxResponse::failure(self.code(), details)
    }
}

// The site's scripts read `response`, not the status line, so failures stay 200.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.to_ajax())).into_response()
    }
}

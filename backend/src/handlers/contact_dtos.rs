use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields posted by the "Request Demo" form. Both are required; absence is checked
/// by the relay rather than by the extractor so the client always gets an
/// `AjaxResponse`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub email: Option<String>,
    pub emailcontent: Option<String>,
}

/// The JSON envelope the site's scripts expect back from the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AjaxResponse {
    pub response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
}

impl AjaxResponse {
    pub fn success() -> Self {
        Self { response: true, message: None, json: None }
    }

    pub fn failure(message: impl Into<String>, json: Value) -> Self {
        Self {
            response: false,
            message: Some(message.into()),
            json: Some(json),
        }
    }
}

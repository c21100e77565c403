use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Error, Debug, PartialEq)]
pub enum ContactError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Contact request failed: {0}")]
    Request(String),

    #[error("Contact endpoint rejected the message with status {0}")]
    Rejected(u16),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Trims every field and refuses empty ones, the same way the browser's
    /// `required` check would.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let field = |label: &'static str, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(ContactError::MissingField(label))
            } else {
                Ok(value.to_string())
            }
        };

        Ok(Self {
            name: field("name", name)?,
            email: field("email", email)?,
            message: field("message", message)?,
        })
    }
}

/// Hands a contact request to the configured endpoint. Without one the
/// message is dropped and the call succeeds.
pub async fn submit(request: ContactRequest) -> Result<(), ContactError> {
    let Some(endpoint) = config::get_contact_endpoint() else {
        info!("No contact endpoint configured, message from {} not sent", request.email);
        return Ok(());
    };

    let response = Request::post(endpoint)
        .json(&request)
        .map_err(|e| ContactError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Request(e.to_string()))?;

    if !response.ok() {
        warn!("Contact endpoint answered {}", response.status());
        return Err(ContactError::Rejected(response.status()));
    }

    info!("Contact message from {} delivered", request.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_and_keeps_all_fields() {
        let request = ContactRequest::new("  Ana Pérez ", "ana@example.com\n", " Hola ").unwrap();
        assert_eq!(request.name, "Ana Pérez");
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.message, "Hola");
    }

    #[test]
    fn empty_fields_are_rejected_in_form_order() {
        assert_eq!(
            ContactRequest::new("", "", "").unwrap_err(),
            ContactError::MissingField("name")
        );
        assert_eq!(
            ContactRequest::new("Ana", "   ", "Hola").unwrap_err(),
            ContactError::MissingField("email")
        );
        assert_eq!(
            ContactRequest::new("Ana", "ana@example.com", "").unwrap_err(),
            ContactError::MissingField("message")
        );
    }

    #[test]
    fn serializes_as_flat_json() {
        let request = ContactRequest::new("Ana", "ana@example.com", "Quiero una tienda").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Ana",
                "email": "ana@example.com",
                "message": "Quiero una tienda",
            })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            ContactError::MissingField("email").to_string(),
            "Missing required field: email"
        );
        assert_eq!(
            ContactError::Rejected(502).to_string(),
            "Contact endpoint rejected the message with status 502"
        );
    }
}

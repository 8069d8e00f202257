//! Outbound boundary to the transactional-email service (EmailJS-compatible).
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since delivery is only
//! meaningful from the browser.
//!
//! The service is an opaque request/response boundary: one call per submit,
//! success or failure, no retry and no cancellation. Failures are never fatal;
//! the caller reports them and lets the user resubmit.

use serde::Serialize;
use thiserror::Error;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// EmailJS identifiers are public client-side values, not secrets.
pub const EMAILJS_SERVICE_ID: &str = "service_portfolio";
pub const EMAILJS_TEMPLATE_ID: &str = "template_contact";
pub const EMAILJS_PUBLIC_KEY: &str = "cCk3Ku9vTr4x1WqZp";

/// A single contact-form submission. Doubles as the `template_params` field
/// mapping on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormSubmission {
    /// Presence validation only - field formats (including email shape) are
    /// deliberately not checked locally.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("couldn't reach the email service: {0}")]
    Network(String),
    #[error("email service rejected the request with status {0}")]
    Rejected(u16),
    #[error("email delivery is only available in the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn request_body(submission: &FormSubmission) -> serde_json::Value {
    serde_json::json!({
        "service_id": EMAILJS_SERVICE_ID,
        "template_id": EMAILJS_TEMPLATE_ID,
        "user_id": EMAILJS_PUBLIC_KEY,
        "template_params": submission,
    })
}

/// Sends one contact-form submission to the delivery service.
///
/// # Errors
///
/// Returns [`SendError`] if the request couldn't be sent or the service
/// responded with a non-success status.
pub async fn send_contact_email(submission: &FormSubmission) -> Result<(), SendError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(EMAILJS_ENDPOINT)
            .json(&request_body(submission))
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(SendError::Rejected(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(SendError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> FormSubmission {
        FormSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site!".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body(&submission());
        assert_eq!(body["service_id"], EMAILJS_SERVICE_ID);
        assert_eq!(body["template_id"], EMAILJS_TEMPLATE_ID);
        assert_eq!(body["user_id"], EMAILJS_PUBLIC_KEY);
        let params = &body["template_params"];
        assert_eq!(params["name"], "Jane Doe");
        assert_eq!(params["email"], "jane@example.com");
        assert_eq!(params["subject"], "Hello");
        assert_eq!(params["message"], "Nice site!");
    }

    #[test]
    fn test_complete_submission() {
        assert!(submission().is_complete());
    }

    #[test]
    fn test_missing_or_blank_field_is_incomplete() {
        assert!(!FormSubmission::default().is_complete());
        let mut sub = submission();
        sub.message = "   ".to_string();
        assert!(!sub.is_complete());
        let mut sub = submission();
        sub.email = String::new();
        assert!(!sub.is_complete());
    }

    #[test]
    fn test_email_shape_is_not_validated_locally() {
        let mut sub = submission();
        sub.email = "not-an-email".to_string();
        assert!(sub.is_complete());
    }

    #[test]
    fn test_send_error_messages() {
        assert_eq!(
            SendError::Rejected(422).to_string(),
            "email service rejected the request with status 422"
        );
        assert!(SendError::Network("timed out".to_string())
            .to_string()
            .contains("timed out"));
    }
}

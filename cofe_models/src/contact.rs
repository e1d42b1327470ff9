use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// A contact form submission as received from the client.
///
/// Only the email address is validated. Name and message accept any text,
/// including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated submission as handed to the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContactRecord {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
}

/// Opaque identifier assigned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionResult {
    pub stored: bool,
    pub email_sent: bool,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No complete set of smtp settings was available, delivery was skipped.
    EmailNotConfigured,
    /// Delivery was attempted. This does not imply that it succeeded.
    Received,
}

impl SubmissionStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmailNotConfigured => {
                "Contact saved. Email service not configured on server. Please set SMTP \
                 environment variables to enable email sending."
            }
            Self::Received => {
                "Thanks! Your message has been received. We'll get back to you shortly."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages() {
        assert_eq!(
            SubmissionStatus::EmailNotConfigured.message(),
            "Contact saved. Email service not configured on server. Please set SMTP environment \
             variables to enable email sending."
        );
        assert_eq!(
            SubmissionStatus::Received.message(),
            "Thanks! Your message has been received. We'll get back to you shortly."
        );
    }

    #[test]
    fn stored_record_serializes_plain_address() {
        let record = StoredContactRecord {
            name: "Ada".into(),
            email: "ada@example.com".parse().unwrap(),
            message: "Hi\nthere".into(),
        };

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hi\nthere",
            })
        );
    }
}

use cofe_models::contact::{ContactSubmission, SubmissionResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiSubmissionResult {
    /// Always `true`, invalid submissions are answered with an error instead.
    pub ok: bool,
    pub stored: bool,
    pub email_sent: bool,
    pub message: &'static str,
}

impl From<SubmissionResult> for ApiSubmissionResult {
    fn from(value: SubmissionResult) -> Self {
        Self {
            ok: true,
            stored: value.stored,
            email_sent: value.email_sent,
            message: value.status.message(),
        }
    }
}

/// Points at the offending field of the request body.
#[derive(Debug, Serialize)]
pub struct ApiValidationError {
    pub loc: [&'static str; 2],
    pub msg: &'static str,
}

impl ApiValidationError {
    pub const INVALID_EMAIL: Self = Self {
        loc: ["body", "email"],
        msg: "value is not a valid email address",
    };
}

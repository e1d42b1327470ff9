use std::future::Future;

use cofe_models::contact::{ContactSubmission, SubmissionResult};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates a contact form submission, stores it and forwards it by
    /// email.
    ///
    /// Storing and forwarding are both best-effort: their failures are
    /// reported in the returned [`SubmissionResult`] and never turn into an
    /// error. The only error is an invalid email address, in which case
    /// nothing is stored or sent.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<SubmissionResult, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The email address is invalid.")]
    InvalidEmail,
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<SubmissionResult, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

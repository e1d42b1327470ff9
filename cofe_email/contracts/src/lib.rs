use std::future::Future;

use cofe_models::{email_address::EmailAddress, Sensitive};
use thiserror::Error;

/// The smtp relay used to deliver notification emails.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MailRelayService: Send + Sync + 'static {
    /// Connects to the relay described by `settings`, upgrades the connection
    /// using STARTTLS, authenticates and submits `email`.
    ///
    /// Exactly one connection is opened per invocation and nothing is retried.
    fn send(
        &self,
        settings: &MailSettings,
        email: Email,
    ) -> impl Future<Output = Result<(), MailDeliveryError>> + Send;
}

/// Source of the smtp settings.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MailSettingsService: Send + Sync + 'static {
    /// Returns the current smtp settings, or `None` if any of them is missing.
    ///
    /// Invoked once per delivery, so changes to the underlying source are
    /// picked up without a restart.
    fn load(&self) -> Option<MailSettings>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Sensitive<String>,
    /// Sender address, not validated until a message is built.
    pub from: String,
    /// Recipient address, not validated until a message is built.
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
    pub reply_to: Option<EmailAddress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
}

#[derive(Debug, Error)]
pub enum MailDeliveryError {
    #[error("The smtp relay did not accept the message.")]
    Rejected,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockMailRelayService {
    pub fn with_send(
        mut self,
        settings: MailSettings,
        email: Email,
        result: Result<(), MailDeliveryError>,
    ) -> Self {
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(settings),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(feature = "mock")]
impl MockMailSettingsService {
    pub fn with_load(mut self, result: Option<MailSettings>) -> Self {
        self.expect_load().once().return_once(move || result);
        self
    }
}

use std::time::Duration;

use anyhow::{anyhow, Context};
use cofe_di::Build;
use cofe_email_contracts::{ContentType, Email, MailDeliveryError, MailRelayService, MailSettings};
use cofe_utils::Apply;
use lettre::{
    message::{Mailbox, MessageBuilder, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, instrument};

pub mod settings;

#[derive(Debug, Clone, Build)]
pub struct SmtpMailRelayServiceImpl {
    config: MailRelayConfig,
}

#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    /// Upper bound for the whole delivery, from connecting to the relay until
    /// the message has been accepted.
    pub timeout: Duration,
}

impl SmtpMailRelayServiceImpl {
    pub fn new(config: MailRelayConfig) -> Self {
        Self { config }
    }
}

impl MailRelayService for SmtpMailRelayServiceImpl {
    #[instrument(skip_all, fields(host = %settings.host, port = settings.port))]
    async fn send(&self, settings: &MailSettings, email: Email) -> Result<(), MailDeliveryError> {
        let message = build_message(settings, email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .context("Failed to configure smtp transport")?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.password.0.clone(),
            ))
            .timeout(Some(self.config.timeout))
            .build();

        debug!("submitting message to smtp relay");
        let response = tokio::time::timeout(self.config.timeout, transport.send(message))
            .await
            .map_err(|_| anyhow!("Timed out after {:?}", self.config.timeout))
            .and_then(|result| result.map_err(Into::into))
            .with_context(|| {
                format!(
                    "Failed to send email via {}:{}",
                    settings.host, settings.port
                )
            })?;

        if !response.is_positive() {
            return Err(MailDeliveryError::Rejected);
        }

        Ok(())
    }
}

fn build_message(settings: &MailSettings, email: Email) -> anyhow::Result<Message> {
    let from = settings
        .from
        .parse::<Mailbox>()
        .with_context(|| format!("Invalid sender address {:?}", settings.from))?;
    let to = settings
        .to
        .parse::<Mailbox>()
        .with_context(|| format!("Invalid recipient address {:?}", settings.to))?;
    let reply_to = email.reply_to.map(|address| Mailbox::new(None, address.0));

    let body = match email.content_type {
        ContentType::Text => SinglePart::plain(email.body),
        ContentType::Html => SinglePart::html(email.body),
    };

    Message::builder()
        .from(from)
        .to(to)
        .apply_map(reply_to, MessageBuilder::reply_to)
        .subject(email.subject)
        .multipart(MultiPart::alternative().singlepart(body))
        .context("Failed to build email message")
}

use anyhow::Context;
use clap::Subcommand;
use cofe_config::Config;
use cofe_email_contracts::{ContentType, Email, MailRelayService, MailSettingsService};
use cofe_email_impl::{
    settings::EnvMailSettingsServiceImpl, MailRelayConfig, SmtpMailRelayServiceImpl,
};
use cofe_models::email_address::EmailAddress;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability using the smtp settings from the environment
    Test {
        /// Overrides the configured recipient (SMTP_TO)
        recipient: Option<EmailAddress>,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: Option<EmailAddress>) -> anyhow::Result<()> {
    let mut settings = EnvMailSettingsServiceImpl
        .load()
        .context("Email service not configured, set the SMTP_* environment variables")?;
    if let Some(recipient) = recipient {
        settings.to = recipient.as_str().into();
    }

    let relay = SmtpMailRelayServiceImpl::new(MailRelayConfig {
        timeout: config.email.timeout.into(),
    });

    relay
        .send(
            &settings,
            Email {
                subject: "Email Deliverability Test".into(),
                body: "Email deliverability seems to be working!".into(),
                content_type: ContentType::Text,
                reply_to: None,
            },
        )
        .await
        .context("Failed to send email")
}

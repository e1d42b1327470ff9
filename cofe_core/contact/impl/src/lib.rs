use cofe_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use cofe_di::Build;
use cofe_email_contracts::{
    ContentType, Email, MailDeliveryError, MailRelayService, MailSettings, MailSettingsService,
};
use cofe_models::{
    contact::{ContactSubmission, StoredContactRecord, SubmissionResult, SubmissionStatus},
    email_address::EmailAddress,
};
use cofe_persistence_contracts::{DocumentStore, DocumentStoreError};
use cofe_templates_contracts::{ContactNotificationTemplate, TemplateService};
use tracing::{debug, error, info, instrument};


#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Store, Relay, Settings, Template> {
    store: Store,
    relay: Relay,
    mail_settings: Settings,
    template: Template,
}

impl<Store, Relay, Settings, Template> ContactFeatureService
    for ContactFeatureServiceImpl<Store, Relay, Settings, Template>
where
    Store: DocumentStore,
    Relay: MailRelayService,
    Settings: MailSettingsService,
    Template: TemplateService,
{
    #[instrument(skip_all)]
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionResult, ContactSubmitError> {
        let email = submission
            .email
            .parse::<EmailAddress>()
            .map_err(|_| ContactSubmitError::InvalidEmail)?;

        let record = StoredContactRecord {
            name: submission.name,
            email,
            message: submission.message,
        };

        let stored = match self.store.create_contact(&record).await {
            Ok(id) => {
                debug!(%id, "stored contact submission");
                true
            }
            Err(DocumentStoreError::NotConfigured) => false,
            Err(DocumentStoreError::Other(err)) => {
                error!("Failed to store contact submission: {err:#}");
                false
            }
        };

        let Some(settings) = self.mail_settings.load() else {
            info!("smtp is not configured, skipping email notification");
            return Ok(SubmissionResult {
                stored,
                email_sent: false,
                status: SubmissionStatus::EmailNotConfigured,
            });
        };

        let email_sent = self.notify(&settings, record).await;

        Ok(SubmissionResult {
            stored,
            email_sent,
            status: SubmissionStatus::Received,
        })
    }
}

impl<Store, Relay, Settings, Template> ContactFeatureServiceImpl<Store, Relay, Settings, Template>
where
    Relay: MailRelayService,
    Template: TemplateService,
{
    /// Sends the notification email and reports whether the relay accepted it.
    async fn notify(&self, settings: &MailSettings, record: StoredContactRecord) -> bool {
        let body = match self.template.render(&ContactNotificationTemplate {
            name: record.name.clone(),
            email: record.email.to_string(),
            message: record.message,
        }) {
            Ok(body) => body,
            Err(err) => {
                error!("Failed to render contact notification: {err:#}");
                return false;
            }
        };

        let email = Email {
            subject: format!("New Inquiry from Bean and Cofe: {}", record.name),
            body,
            content_type: ContentType::Html,
            reply_to: Some(record.email),
        };

        match self.relay.send(settings, email).await {
            Ok(()) => {
                info!("sent contact notification");
                true
            }
            Err(MailDeliveryError::Rejected) => {
                error!("smtp relay rejected the contact notification");
                false
            }
            Err(MailDeliveryError::Other(err)) => {
                error!("Failed to send contact notification: {err:#}");
                false
            }
        }
    }
}

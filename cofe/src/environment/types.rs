use cofe_core_contact_impl::ContactFeatureServiceImpl;
use cofe_core_health_impl::HealthFeatureServiceImpl;
use cofe_email_impl::{settings::EnvMailSettingsServiceImpl, SmtpMailRelayServiceImpl};
use cofe_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = cofe_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type Store = crate::database::Store;

// Email
pub type MailRelay = SmtpMailRelayServiceImpl;
pub type MailSettings = EnvMailSettingsServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Store, MailRelay, MailSettings, Template>;
pub type HealthFeature = HealthFeatureServiceImpl<Store>;

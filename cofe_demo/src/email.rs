use std::sync::LazyLock;

use cofe_email_contracts::MailSettings;

pub static SMTP_SETTINGS: LazyLock<MailSettings> = LazyLock::new(|| MailSettings {
    host: "smtp.example.com".into(),
    port: 587,
    user: "mailer@example.com".into(),
    password: "correct horse battery staple".to_owned().into(),
    from: "mailer@example.com".into(),
    to: "owner@example.com".into(),
});

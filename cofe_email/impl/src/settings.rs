use cofe_di::Build;
use cofe_email_contracts::{MailSettings, MailSettingsService};
use tracing::{debug, warn};

pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Reads the smtp settings from the process environment on every call.
///
/// | Variable | Fallback |
/// |----------|----------|
/// | `SMTP_HOST` | |
/// | `SMTP_PORT` | `587` |
/// | `SMTP_USER` | |
/// | `SMTP_PASS` | |
/// | `SMTP_FROM` | `SMTP_USER` |
/// | `SMTP_TO` | `CONTACT_RECIPIENT` |
#[derive(Debug, Clone, Copy, Default, Build)]
pub struct EnvMailSettingsServiceImpl;

impl MailSettingsService for EnvMailSettingsServiceImpl {
    fn load(&self) -> Option<MailSettings> {
        from_lookup(|key| std::env::var(key).ok())
    }
}

/// Resolves the smtp settings using `lookup` to read variables.
///
/// Empty values count as missing. Returns `None` unless all six effective
/// settings are present.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<MailSettings> {
    let var = |key: &str| {
        let value = lookup(key).filter(|value| !value.is_empty());
        if value.is_none() {
            debug!("{key} is not set");
        }
        value
    };

    let port = match lookup("SMTP_PORT") {
        None => DEFAULT_SMTP_PORT,
        Some(port) => match port.parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                warn!(?port, "ignoring smtp settings with an invalid SMTP_PORT");
                return None;
            }
        },
    };

    let host = var("SMTP_HOST");
    let user = var("SMTP_USER");
    let password = var("SMTP_PASS");
    let from = var("SMTP_FROM").or_else(|| user.clone());
    let to = var("SMTP_TO").or_else(|| var("CONTACT_RECIPIENT"));

    Some(MailSettings {
        host: host?,
        port,
        user: user?,
        password: password?.into(),
        from: from?,
        to: to?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cofe_demo::email::SMTP_SETTINGS;
    use pretty_assertions::assert_eq;

    use super::*;

    const COMPLETE: &[(&str, &str)] = &[
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_PORT", "587"),
        ("SMTP_USER", "mailer@example.com"),
        ("SMTP_PASS", "correct horse battery staple"),
        ("SMTP_FROM", "mailer@example.com"),
        ("SMTP_TO", "owner@example.com"),
    ];

    fn load(vars: &[(&str, &str)]) -> Option<MailSettings> {
        let vars = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<HashMap<_, _>>();
        from_lookup(|key| vars.get(key).cloned())
    }

    fn without(key: &str) -> Vec<(&'static str, &'static str)> {
        COMPLETE.iter().copied().filter(|&(k, _)| k != key).collect()
    }

    fn with(key: &'static str, value: &'static str) -> Vec<(&'static str, &'static str)> {
        let mut vars = without(key);
        vars.push((key, value));
        vars
    }

    #[test]
    fn complete() {
        assert_eq!(load(COMPLETE), Some(SMTP_SETTINGS.clone()));
    }

    #[test]
    fn nothing_set() {
        assert_eq!(load(&[]), None);
    }

    #[test]
    fn default_port() {
        let settings = load(&without("SMTP_PORT")).unwrap();
        assert_eq!(settings.port, DEFAULT_SMTP_PORT);
    }

    #[test]
    fn custom_port() {
        let settings = load(&with("SMTP_PORT", "2525")).unwrap();
        assert_eq!(settings.port, 2525);
    }

    #[test]
    fn invalid_port() {
        for port in ["", "smtp", "0", "65536", "-1"] {
            assert_eq!(load(&with("SMTP_PORT", port)), None, "{port:?}");
        }
    }

    #[test]
    fn from_falls_back_to_user() {
        let settings = load(&without("SMTP_FROM")).unwrap();
        assert_eq!(settings.from, "mailer@example.com");

        let settings = load(&with("SMTP_FROM", "")).unwrap();
        assert_eq!(settings.from, "mailer@example.com");
    }

    #[test]
    fn to_falls_back_to_contact_recipient() {
        let mut vars = without("SMTP_TO");
        vars.push(("CONTACT_RECIPIENT", "inbox@example.com"));

        let settings = load(&vars).unwrap();

        assert_eq!(settings.to, "inbox@example.com");
    }

    #[test]
    fn smtp_to_takes_precedence() {
        let mut vars = COMPLETE.to_vec();
        vars.push(("CONTACT_RECIPIENT", "inbox@example.com"));

        let settings = load(&vars).unwrap();

        assert_eq!(settings.to, "owner@example.com");
    }

    #[test]
    fn any_required_value_missing() {
        for key in ["SMTP_HOST", "SMTP_USER", "SMTP_PASS", "SMTP_TO"] {
            assert_eq!(load(&without(key)), None, "{key} missing");
            assert_eq!(load(&with(key, "")), None, "{key} empty");
        }
    }

    #[test]
    fn from_and_user_missing() {
        let vars = without("SMTP_USER")
            .into_iter()
            .filter(|&(k, _)| k != "SMTP_FROM")
            .collect::<Vec<_>>();
        assert_eq!(load(&vars), None);
    }
}

use std::{env, net::IpAddr, path::Path};

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_ENV: &str = "COFE_CONFIG";

/// Loads the embedded default config, layers the files listed in
/// [`CONFIG_PATHS_ENV`] on top of it and finally applies the `PORT`,
/// `DATABASE_URL` and `DATABASE_NAME` environment variables.
pub fn load() -> anyhow::Result<Config> {
    let paths = env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();

    load_with(&paths, |key| env::var(key).ok())
}

/// Loads only the embedded default config.
pub fn load_default() -> anyhow::Result<Config> {
    load_with(&[] as &[&Path], |_| None)
}

fn load_with(
    paths: &[impl AsRef<Path>],
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    apply_env_overrides(builder, lookup)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn apply_env_overrides(
    builder: ConfigBuilder<DefaultState>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let non_empty = |key| lookup(key).filter(|value| !value.is_empty());

    let port = non_empty("PORT")
        .map(|port| port.parse::<u16>().context("Invalid PORT"))
        .transpose()?
        .map(i64::from);

    Ok(builder
        .set_override_option("http.port", port)?
        .set_override_option("database.url", non_empty("DATABASE_URL"))?
        .set_override_option("database.name", non_empty("DATABASE_NAME"))?)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom("Invalid duration"))
    }
}

fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let mut out = std::time::Duration::default();
    for part in s.split_whitespace() {
        let mut bytes = part.bytes();
        let mut seconds = 0u64;
        for b in bytes.by_ref() {
            let unit = match b {
                b'0'..=b'9' => {
                    seconds = seconds.checked_mul(10)?.checked_add((b - b'0') as u64)?;
                    continue;
                }
                b's' => 1,
                b'm' => 60,
                b'h' => 60 * 60,
                b'd' => 24 * 60 * 60,
                _ => return None,
            };
            seconds = seconds.checked_mul(unit)?;
            break;
        }
        if bytes.next().is_some() {
            return None;
        }
        out += std::time::Duration::from_secs(seconds);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_paths() -> &'static [&'static str] {
        &[]
    }

    #[test]
    fn load_default_config() {
        let config = load_default().unwrap();

        assert_eq!(config.http.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.database.url, None);
        assert_eq!(config.database.name, None);
        assert_eq!(config.database.timeout.0.as_secs(), 5);
        assert_eq!(config.email.timeout.0.as_secs(), 15);
    }

    #[test]
    fn env_overrides() {
        let env = HashMap::from([
            ("PORT", "9000"),
            ("DATABASE_URL", "mongodb://db:27017"),
            ("DATABASE_NAME", ""),
        ]);

        let config =
            load_with(no_paths(), |key| env.get(key).map(|&value| value.into())).unwrap();

        assert_eq!(config.http.port, 9000);
        assert_eq!(config.database.url.as_deref(), Some("mongodb://db:27017"));
        assert_eq!(config.database.name, None);
    }

    #[test]
    fn invalid_port() {
        load_with(no_paths(), |key| (key == "PORT").then(|| "http".into())).unwrap_err();
    }

    #[test]
    fn missing_config_file() {
        load_with(&["/nonexistent/cofe.toml"], |_| None).unwrap_err();
    }

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some(((24 + 2) * 60 + 3) * 60 + 4)),
            ("xyz", None),
            ("7dd", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected);
        }
    }
}

use cofe_api_rest::RestServerConfig;
use cofe_config::Config;
use cofe_core_health_impl::HealthFeatureConfig;
use cofe_di::provider;
use cofe_email_impl::MailRelayConfig;
use types::Store;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        store: Store,
        ..config: ConfigProvider {
            RestServerConfig,
            MailRelayConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, store: Store) -> Self {
        Self {
            _cache: Default::default(),
            store,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        rest_server_config: RestServerConfig,
        mail_relay_config: MailRelayConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        let mail_relay_config = MailRelayConfig {
            timeout: config.email.timeout.into(),
        };

        // effective settings, whether they came from a config file or the environment
        let health_feature_config = HealthFeatureConfig {
            database_url_set: config.database.url.is_some(),
            database_name_set: config.database.name.is_some(),
        };

        Self {
            _cache: Default::default(),
            rest_server_config,
            mail_relay_config,
            health_feature_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use cofe_di::Provide;
    use cofe_persistence_contracts::null::NullDocumentStore;
    use types::{ContactFeature, HealthFeature, RestServer};

    use super::*;

    fn provider() -> Provider {
        let config = cofe_config::load_default().unwrap();
        let config_provider = ConfigProvider::new(&config);
        Provider::new(config_provider, Store::Null(NullDocumentStore))
    }

    #[test]
    fn provide_rest_server() {
        let _: RestServer = provider().provide();
    }

    #[test]
    fn provide_features() {
        let mut provider = provider();
        let _: ContactFeature = provider.provide();
        let _: HealthFeature = provider.provide();
    }

    #[test]
    fn health_flags_follow_effective_database_config() {
        // Arrange
        let mut config = cofe_config::load_default().unwrap();
        config.database.url = Some("mongodb://localhost:27017".into());

        // Act
        let health_config: HealthFeatureConfig = ConfigProvider::new(&config).provide();

        // Assert
        assert!(health_config.database_url_set);
        assert!(!health_config.database_name_set);
    }
}

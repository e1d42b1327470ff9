use cofe_core_health_contracts::{DatabaseReport, DatabaseStatus, HealthFeatureService};
use cofe_di::Build;
use cofe_persistence_contracts::{DocumentStore, DocumentStoreError};
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Store> {
    store: Store,
    config: HealthFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl<Store> HealthFeatureService for HealthFeatureServiceImpl<Store>
where
    Store: DocumentStore,
{
    async fn get_database_report(&self) -> DatabaseReport {
        let status = match self.store.list_collections().await {
            Ok(mut collections) => {
                collections.truncate(DatabaseStatus::MAX_COLLECTIONS);
                DatabaseStatus::Connected { collections }
            }
            Err(DocumentStoreError::NotConfigured) => DatabaseStatus::NotInitialized,
            Err(DocumentStoreError::Other(err)) => {
                error!("Failed to list collections: {err:#}");
                DatabaseStatus::Error(
                    err.to_string()
                        .chars()
                        .take(DatabaseStatus::MAX_ERROR_LENGTH)
                        .collect(),
                )
            }
        };

        DatabaseReport {
            status,
            url_set: self.config.database_url_set,
            name_set: self.config.database_name_set,
        }
    }
}

use cofe_config::DatabaseConfig;
use cofe_models::contact::{DocumentId, StoredContactRecord};
use cofe_persistence_contracts::{null::NullDocumentStore, DocumentStore, DocumentStoreError};
use cofe_persistence_mongo::{MongoDocumentStore, MongoDocumentStoreConfig};
use tracing::{error, info, warn};

/// The document store selected at startup.
#[derive(Debug, Clone)]
pub enum Store {
    Mongo(MongoDocumentStore),
    Null(NullDocumentStore),
}

/// Connects to the configured database.
///
/// Falls back to [`NullDocumentStore`] if no database has been configured or
/// the client could not be created, so contact submissions are still
/// accepted.
pub async fn connect(config: &DatabaseConfig) -> Store {
    let (Some(url), Some(name)) = (&config.url, &config.name) else {
        warn!("DATABASE_URL or DATABASE_NAME not set, contact submissions will not be stored");
        return Store::Null(NullDocumentStore);
    };

    info!("Connecting to database");
    let store = match MongoDocumentStore::connect(&MongoDocumentStoreConfig {
        url: url.clone(),
        name: name.clone(),
        timeout: config.timeout.into(),
    })
    .await
    {
        Ok(store) => store,
        Err(err) => {
            error!("Failed to connect to database: {err:#}");
            return Store::Null(NullDocumentStore);
        }
    };

    if let Err(err) = store.ping().await {
        warn!("Database is not reachable yet: {err:#}");
    }

    Store::Mongo(store)
}

impl DocumentStore for Store {
    async fn create_contact(
        &self,
        record: &StoredContactRecord,
    ) -> Result<DocumentId, DocumentStoreError> {
        match self {
            Self::Mongo(store) => store.create_contact(record).await,
            Self::Null(store) => store.create_contact(record).await,
        }
    }

    async fn list_collections(&self) -> Result<Vec<String>, DocumentStoreError> {
        match self {
            Self::Mongo(store) => store.list_collections().await,
            Self::Null(store) => store.list_collections().await,
        }
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        match self {
            Self::Mongo(store) => store.ping().await,
            Self::Null(store) => store.ping().await,
        }
    }
}

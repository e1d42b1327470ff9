use std::time::Duration;

use anyhow::{anyhow, Context};
use cofe_models::contact::{DocumentId, StoredContactRecord};
use cofe_persistence_contracts::{DocumentStore, DocumentStoreError};
use mongodb::{
    bson::{doc, Bson, DateTime},
    options::ClientOptions,
    Client, Database,
};
use serde::Serialize;
use tracing::{instrument, trace};

pub const CONTACT_COLLECTION: &str = "contactmessage";

#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

#[derive(Debug)]
pub struct MongoDocumentStoreConfig {
    pub url: String,
    pub name: String,
    /// Upper bound for establishing a connection and for selecting a server
    /// for an operation.
    pub timeout: Duration,
}

impl MongoDocumentStore {
    /// Prepares a client for the configured database.
    ///
    /// The connection itself is established lazily, so an unreachable server
    /// does not prevent startup.
    pub async fn connect(config: &MongoDocumentStoreConfig) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .context("Failed to parse database url")?;
        options.connect_timeout = Some(config.timeout);
        options.server_selection_timeout = Some(config.timeout);

        let client = Client::with_options(options).context("Failed to create database client")?;

        Ok(Self {
            db: client.database(&config.name),
        })
    }
}

/// The shape of a contact submission in the `contactmessage` collection.
#[derive(Debug, Serialize)]
struct ContactDocument {
    name: String,
    email: String,
    message: String,
    created_at: DateTime,
    updated_at: DateTime,
}

impl ContactDocument {
    fn new(record: &StoredContactRecord, now: DateTime) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.as_str().into(),
            message: record.message.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl DocumentStore for MongoDocumentStore {
    #[instrument(skip_all)]
    async fn create_contact(
        &self,
        record: &StoredContactRecord,
    ) -> Result<DocumentId, DocumentStoreError> {
        let document = ContactDocument::new(record, DateTime::now());

        let result = self
            .db
            .collection::<ContactDocument>(CONTACT_COLLECTION)
            .insert_one(document)
            .await
            .context("Failed to insert contact document")?;

        let id = decode_id(result.inserted_id)?;
        trace!(%id, "inserted contact document");
        Ok(id)
    }

    #[instrument(skip_all)]
    async fn list_collections(&self) -> Result<Vec<String>, DocumentStoreError> {
        self.db
            .list_collection_names()
            .await
            .context("Failed to list collections")
            .map_err(Into::into)
    }

    #[instrument(skip_all)]
    async fn ping(&self) -> Result<(), DocumentStoreError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .context("Failed to ping database")
            .map_err(Into::into)
    }
}

fn decode_id(id: Bson) -> anyhow::Result<DocumentId> {
    match id {
        Bson::ObjectId(id) => Ok(DocumentId(id.to_hex())),
        Bson::String(id) => Ok(DocumentId(id)),
        id => Err(anyhow!("Unexpected document id {id:?}")),
    }
}

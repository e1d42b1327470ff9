use std::future::Future;

use cofe_models::contact::{DocumentId, StoredContactRecord};
use thiserror::Error;

pub mod null;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DocumentStore: Send + Sync + 'static {
    /// Persists a contact submission and returns the identifier assigned by
    /// the store.
    fn create_contact(
        &self,
        record: &StoredContactRecord,
    ) -> impl Future<Output = Result<DocumentId, DocumentStoreError>> + Send;

    /// Lists the names of the collections in the configured database.
    fn list_collections(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, DocumentStoreError>> + Send;

    /// Verify the connection to the database.
    fn ping(&self) -> impl Future<Output = Result<(), DocumentStoreError>> + Send;
}

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("The document store is not configured.")]
    NotConfigured,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockDocumentStore {
    pub fn with_create_contact(
        mut self,
        record: StoredContactRecord,
        result: Result<DocumentId, DocumentStoreError>,
    ) -> Self {
        self.expect_create_contact()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_collections(
        mut self,
        result: Result<Vec<String>, DocumentStoreError>,
    ) -> Self {
        self.expect_list_collections()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}

use cofe_models::contact::{DocumentId, StoredContactRecord};
use tracing::debug;

use crate::{DocumentStore, DocumentStoreError};

/// Document store used when no database has been configured.
///
/// Every operation fails with [`DocumentStoreError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDocumentStore;

impl DocumentStore for NullDocumentStore {
    async fn create_contact(
        &self,
        _record: &StoredContactRecord,
    ) -> Result<DocumentId, DocumentStoreError> {
        debug!("no document store configured, discarding contact record");
        Err(DocumentStoreError::NotConfigured)
    }

    async fn list_collections(&self) -> Result<Vec<String>, DocumentStoreError> {
        Err(DocumentStoreError::NotConfigured)
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::NotConfigured)
    }
}

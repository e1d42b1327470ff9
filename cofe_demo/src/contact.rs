use std::sync::LazyLock;

use cofe_models::contact::{ContactSubmission, DocumentId, StoredContactRecord};

pub static ADA: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Ada".into(),
    email: "ada@example.com".into(),
    message: "Hi\nthere".into(),
});

pub static ADA_RECORD: LazyLock<StoredContactRecord> = LazyLock::new(|| StoredContactRecord {
    name: ADA.name.clone(),
    email: ADA.email.parse().unwrap(),
    message: ADA.message.clone(),
});

pub static ADA_DOCUMENT_ID: LazyLock<DocumentId> =
    LazyLock::new(|| DocumentId("6717a3f2c1d4e5f60718293a".into()));

pub static INVALID_EMAIL: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    email: "ada(at)example.com".into(),
    ..ADA.clone()
});

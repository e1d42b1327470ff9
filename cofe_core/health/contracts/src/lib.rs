use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthFeatureService: Send + Sync + 'static {
    /// Probe the document store.
    fn get_database_report(&self) -> impl Future<Output = DatabaseReport> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseReport {
    pub status: DatabaseStatus,
    pub url_set: bool,
    pub name_set: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// No document store has been configured.
    NotInitialized,
    /// The store answered, `collections` holds at most
    /// [`DatabaseStatus::MAX_COLLECTIONS`] names.
    Connected { collections: Vec<String> },
    /// The store is configured but failed to answer.
    Error(String),
}

impl DatabaseStatus {
    pub const MAX_COLLECTIONS: usize = 10;
    pub const MAX_ERROR_LENGTH: usize = 50;
}

#[cfg(feature = "mock")]
impl MockHealthFeatureService {
    pub fn with_get_database_report(mut self, report: DatabaseReport) -> Self {
        self.expect_get_database_report()
            .once()
            .return_once(move || Box::pin(std::future::ready(report)));
        self
    }
}

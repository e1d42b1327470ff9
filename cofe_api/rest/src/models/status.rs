use cofe_core_health_contracts::{DatabaseReport, DatabaseStatus};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiDatabaseReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

impl From<DatabaseReport> for ApiDatabaseReport {
    fn from(value: DatabaseReport) -> Self {
        let (database, connection_status, collections) = match value.status {
            DatabaseStatus::Connected { collections } => {
                ("✅ Connected & Working".into(), "Connected", collections)
            }
            DatabaseStatus::Error(err) => (
                format!("⚠️  Connected but Error: {err}"),
                "Not Connected",
                Vec::new(),
            ),
            DatabaseStatus::NotInitialized => (
                "⚠️  Available but not initialized".into(),
                "Not Connected",
                Vec::new(),
            ),
        };

        Self {
            backend: "✅ Running",
            database,
            database_url: set_or_not(value.url_set),
            database_name: set_or_not(value.name_set),
            connection_status,
            collections,
        }
    }
}

fn set_or_not(set: bool) -> &'static str {
    if set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

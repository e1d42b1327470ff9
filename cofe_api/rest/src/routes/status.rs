use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use cofe_core_health_contracts::HealthFeatureService;

use crate::models::{status::ApiDatabaseReport, ApiMessage};

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/", routing::get(root))
        .route("/api/hello", routing::get(hello))
        .route("/test", routing::get(database_report))
        .with_state(service)
}

async fn root() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Bean and Cofe API running",
    })
}

async fn hello() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Hello from the backend API!",
    })
}

async fn database_report(
    service: State<Arc<impl HealthFeatureService>>,
) -> Json<ApiDatabaseReport> {
    Json(service.get_database_report().await.into())
}

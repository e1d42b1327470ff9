use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use cofe_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::debug;

use super::error;
use crate::models::contact::{ApiContactSubmission, ApiSubmissionResult, ApiValidationError};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    submission: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match submission {
        Ok(submission) => submission,
        Err(rejection) => {
            debug!("rejected contact submission: {rejection}");
            return error(rejection.status(), rejection.body_text());
        }
    };

    match service.submit(submission.into()).await {
        Ok(result) => Json(ApiSubmissionResult::from(result)).into_response(),
        Err(ContactSubmitError::InvalidEmail) => error(
            StatusCode::UNPROCESSABLE_ENTITY,
            [ApiValidationError::INVALID_EMAIL],
        ),
    }
}

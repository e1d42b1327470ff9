use serde::Serialize;

pub mod contact;
pub mod status;

#[derive(Debug, Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

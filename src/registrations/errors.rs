use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::models::api_error::ApiError;

use super::models::form_state::FormState;

#[derive(Debug)]
pub enum RegistrationsApiError {
    /// The form failed validation; the page re-renders it with the errors.
    InvalidForm(FormState),
    Processing(ApiError),
}

impl IntoResponse for RegistrationsApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidForm(form) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "form": form }))).into_response()
            }
            Self::Processing(e) => e.into_response(),
        }
    }
}

impl From<ApiError> for RegistrationsApiError {
    fn from(e: ApiError) -> Self {
        Self::Processing(e)
    }
}

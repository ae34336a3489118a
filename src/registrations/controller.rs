use axum::{extract::State, Json};
use axum_macros::debug_handler;
use tracing::Instrument;
use uuid::Uuid;

use crate::{app::structs::form_from_request::FormFromRequest, AppState};

use super::{
    dtos::register_user_dto::RegisterUserDto, errors::RegistrationsApiError,
    models::register_response::RegisterResponse, service,
};

#[debug_handler]
pub async fn register(
    State(state): State<AppState>,
    FormFromRequest(dto): FormFromRequest<RegisterUserDto>,
) -> Result<Json<RegisterResponse>, RegistrationsApiError> {
    let submission_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("registration", %submission_id);

    async move {
        tracing::info!(
            username = %dto.username,
            email = %dto.email,
            country = %dto.country,
            experience = %dto.experience,
            password = %dto.masked_password(),
            terms = dto.terms,
            "registration form received"
        );

        service::register(dto, &state).await.map(Json)
    }
    .instrument(span)
    .await
}

use crate::AppState;

use super::{
    dtos::register_user_dto::RegisterUserDto,
    errors::RegistrationsApiError,
    models::{
        form_state::FormState, register_response::RegisterResponse,
        validation_result::ValidationResult,
    },
};

pub async fn register(
    dto: RegisterUserDto,
    state: &AppState,
) -> Result<RegisterResponse, RegistrationsApiError> {
    let result = dto.check(state.envy.strict_choices());

    let dto = match result {
        ValidationResult::Valid(dto) => dto,
        ValidationResult::Invalid { data, errors } => {
            tracing::info!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "registration form rejected"
            );

            return Err(RegistrationsApiError::InvalidForm(FormState {
                valid: false,
                data,
                errors,
            }));
        }
    };

    tracing::info!(username = %dto.username, "registration form valid");

    if let Err(e) = state.registrar.register(&dto).await {
        tracing::error!(username = %dto.username, error = %e.message, "registration failed");
        return Err(e.into());
    }

    tracing::info!(username = %dto.username, "user registered");

    Ok(RegisterResponse::registered(ValidationResult::Valid(dto).into()))
}

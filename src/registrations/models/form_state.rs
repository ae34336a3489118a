use serde::Serialize;

use crate::registrations::dtos::register_user_dto::RegisterUserDto;

use super::{field_errors::FieldErrors, validation_result::ValidationResult};

#[derive(Debug, Serialize)]
pub struct FormState {
    pub valid: bool,
    pub data: RegisterUserDto,
    pub errors: FieldErrors,
}

impl From<ValidationResult> for FormState {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid(data) => Self {
                valid: true,
                data,
                errors: FieldErrors::default(),
            },
            ValidationResult::Invalid { data, errors } => Self {
                valid: false,
                data,
                errors,
            },
        }
    }
}

use crate::registrations::dtos::register_user_dto::RegisterUserDto;

use super::field_errors::FieldErrors;

/// Outcome of running the registration schema over one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(RegisterUserDto),
    /// The submitted data is kept so the form can be re-rendered with it.
    Invalid {
        data: RegisterUserDto,
        errors: FieldErrors,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

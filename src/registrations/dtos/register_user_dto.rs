use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::registrations::models::{
    field_errors::FieldErrors, validation_result::ValidationResult,
};

use super::{
    deserialize_checkbox, validate_email, validate_utf16_length, COUNTRIES, EXPERIENCE_LEVELS,
};

pub static COUNTRY_REQUIRED: &str = "Debes seleccionar un país";
pub static EXPERIENCE_REQUIRED: &str = "Debes seleccionar tu nivel de experiencia";
pub static TERMS_REQUIRED: &str = "Debes aceptar los términos y condiciones";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[validate(custom = "validate_username")]
    pub username: String,
    #[validate(
        custom = "validate_email",
        length(
            max = 100,
            message = "El correo electrónico no puede exceder 100 caracteres"
        )
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Debes seleccionar un país"))]
    pub country: String,
    #[validate(length(min = 1, message = "Debes seleccionar tu nivel de experiencia"))]
    pub experience: String,
    #[validate(custom = "validate_message")]
    pub message: String,
    #[serde(skip_serializing)]
    #[validate(custom = "validate_password")]
    pub password: String,
    #[serde(skip_serializing)]
    #[validate(
        custom = "validate_confirm_password",
        must_match(other = "password", message = "Las contraseñas no coinciden")
    )]
    pub confirm_password: String,
    #[serde(deserialize_with = "deserialize_checkbox")]
    pub terms: bool,
}

fn validate_username(value: &str) -> Result<(), ValidationError> {
    validate_utf16_length(
        value,
        Some(2),
        None,
        "El nombre de usuario debe tener al menos 2 caracteres",
    )?;
    validate_utf16_length(
        value,
        None,
        Some(50),
        "El nombre de usuario no puede exceder 50 caracteres",
    )
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
    validate_utf16_length(
        value,
        Some(10),
        None,
        "El mensaje debe tener al menos 10 caracteres",
    )?;
    validate_utf16_length(
        value,
        None,
        Some(500),
        "El mensaje no puede exceder 500 caracteres",
    )
}

fn validate_password(value: &str) -> Result<(), ValidationError> {
    validate_utf16_length(
        value,
        Some(8),
        None,
        "La contraseña debe tener al menos 8 caracteres",
    )
}

fn validate_confirm_password(value: &str) -> Result<(), ValidationError> {
    validate_utf16_length(
        value,
        Some(8),
        None,
        "La confirmación de contraseña debe tener al menos 8 caracteres",
    )
}

impl RegisterUserDto {
    /// Runs every field rule plus the password confirmation rule and
    /// collects all failures per field.
    ///
    /// With `strict_choices`, a non-empty `country` or `experience` must
    /// also be one of the known values.
    pub fn check(self, strict_choices: bool) -> ValidationResult {
        let mut errors = match self.validate() {
            Ok(_) => FieldErrors::default(),
            Err(e) => FieldErrors::from(&e),
        };

        if !self.terms {
            errors.push("terms", TERMS_REQUIRED);
        }

        if strict_choices {
            if !self.country.is_empty() && !COUNTRIES.contains(self.country.as_str()) {
                errors.push("country", COUNTRY_REQUIRED);
            }
            if !self.experience.is_empty()
                && !EXPERIENCE_LEVELS.contains(self.experience.as_str())
            {
                errors.push("experience", EXPERIENCE_REQUIRED);
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid(self)
        } else {
            ValidationResult::Invalid { data: self, errors }
        }
    }

    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

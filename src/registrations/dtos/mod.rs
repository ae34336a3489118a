use std::{borrow::Cow, collections::HashSet};

use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub mod register_user_dto;

lazy_static! {
    pub static ref COUNTRIES: HashSet<&'static str> = HashSet::from([
        "AR", "BO", "BR", "CA", "CL", "CO", "CR", "CU", "DE", "DO", "EC", "ES", "FR", "GB", "GT",
        "HN", "IT", "MX", "NI", "PA", "PE", "PR", "PT", "PY", "SV", "US", "UY", "VE",
    ]);
}

lazy_static! {
    pub static ref EXPERIENCE_LEVELS: HashSet<&'static str> =
        HashSet::from(["junior", "mid", "senior", "lead"]);
}

lazy_static! {
    pub static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .unwrap();
}

/// Accepts `local@domain.tld` with a letters-only TLD of two or more
/// characters. The local part may not start with a dot, end with one, or
/// contain two in a row.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("email");
    error.message = Some(Cow::from("Debe ser un correo electrónico válido"));
    Err(error)
}

/// Length as a browser counts it: UTF-16 code units.
pub fn validate_utf16_length(
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
    message: &'static str,
) -> Result<(), ValidationError> {
    let length = value.encode_utf16().count();
    let too_short = min.map_or(false, |min| length < min);
    let too_long = max.map_or(false, |max| length > max);
    if !too_short && !too_long {
        return Ok(());
    }

    let mut error = ValidationError::new("length");
    if let Some(min) = min {
        error.add_param(Cow::from("min"), &min);
    }
    if let Some(max) = max {
        error.add_param(Cow::from("max"), &max);
    }
    error.message = Some(Cow::from(message));
    Err(error)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Checkbox {
    Bool(bool),
    Text(String),
}

/// Reads a checkbox the way browsers submit it: the field is absent when
/// unchecked and carries `on` (or any other value) when checked.
pub fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Checkbox::deserialize(deserializer)? {
        Checkbox::Bool(value) => Ok(value),
        Checkbox::Text(value) => Ok(!matches!(
            value.to_lowercase().as_str(),
            "" | "false" | "off" | "0"
        )),
    }
}

use serde::Serialize;

use super::form_state::FormState;

pub static REGISTERED_MESSAGE: &str = "Usuario registrado exitosamente";

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub form: FormState,
    pub success: bool,
    pub message: String,
}

impl RegisterResponse {
    pub fn registered(form: FormState) -> Self {
        Self {
            form,
            success: true,
            message: REGISTERED_MESSAGE.to_string(),
        }
    }
}

pub mod field_errors;
pub mod form_state;
pub mod register_response;
pub mod validation_result;
